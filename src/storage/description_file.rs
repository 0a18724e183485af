//! Line-oriented text format for chaos game descriptions.
//!
//! ```text
//! Affine2D                     # transform type: Affine2D or Julia
//! 0, 0                         # min x, min y
//! 1, 1                         # max x, max y
//! 0.5, 0, 0, 0.5, 0, 0         # a00 a01 a10 a11 tx ty [weight]
//! 0.5, 0, 0, 0.5, 0.5, 0
//! 0.5, 0, 0, 0.5, 0.25, 0.5
//! ```
//!
//! A Julia description has a single `cx, cy [sign]` line. Fields may be
//! separated by commas, whitespace or both, `#` starts a comment and blank
//! lines are skipped.

use std::fs;
use std::path::Path;

use log::debug;

use crate::core::data::complex::Complex;
use crate::core::data::matrix2x2::Matrix2x2;
use crate::core::data::vector2d::Vector2D;
use crate::core::description::description::ChaosGameDescription;
use crate::core::transforms::affine::{AffineTransform2D, DEFAULT_WEIGHT};
use crate::core::transforms::julia::{JuliaTransform, Sign};
use crate::core::transforms::transform::{Transform, TransformKind};
use crate::storage::errors::{DescriptionFileError, ParseError};

const COMMENT_MARKER: char = '#';
const FIELD_SEPARATOR: &str = ", ";

pub fn read(path: impl AsRef<Path>) -> Result<ChaosGameDescription, DescriptionFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DescriptionFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let description = parse(&text)?;

    debug!(
        "read {} transforms from {}",
        description.transforms().len(),
        path.display()
    );

    Ok(description)
}

pub fn write(
    description: &ChaosGameDescription,
    path: impl AsRef<Path>,
) -> Result<(), DescriptionFileError> {
    let path = path.as_ref();
    let text = serialize(description)?;

    fs::write(path, text).map_err(|source| DescriptionFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("wrote description to {}", path.display());
    Ok(())
}

/// A non-blank line with its comment stripped, split into fields.
struct Directive<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

fn directives(text: &str) -> impl Iterator<Item = Directive<'_>> {
    text.lines().enumerate().filter_map(|(index, raw)| {
        let content = raw.split(COMMENT_MARKER).next().unwrap_or_default().trim();

        if content.is_empty() {
            return None;
        }

        let fields = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();

        Some(Directive {
            line: index + 1,
            fields,
        })
    })
}

pub fn parse(text: &str) -> Result<ChaosGameDescription, ParseError> {
    let end_line = text.lines().count() + 1;
    let mut directives = directives(text);

    let header = directives.next().ok_or(ParseError::MissingSection {
        line: end_line,
        section: "transform type header",
    })?;
    let kind = parse_header(&header)?;

    let min_coords = parse_coords(directives.next(), end_line, "minimum coordinates")?;
    let max_coords = parse_coords(directives.next(), end_line, "maximum coordinates")?;

    let mut transforms = Vec::new();

    for directive in directives {
        let transform = match kind {
            TransformKind::Affine2D => Transform::Affine(parse_affine(&directive)?),
            TransformKind::Julia => {
                if !transforms.is_empty() {
                    return Err(ParseError::UnexpectedLine {
                        line: directive.line,
                    });
                }
                Transform::Julia(parse_julia(&directive)?)
            }
        };

        transforms.push(transform);
    }

    Ok(ChaosGameDescription::new(min_coords, max_coords, transforms))
}

fn parse_header(directive: &Directive<'_>) -> Result<TransformKind, ParseError> {
    let token = directive.fields.join(" ");

    TransformKind::from_header(&token).ok_or(ParseError::UnknownTransformType {
        line: directive.line,
        found: token,
    })
}

fn parse_coords(
    directive: Option<Directive<'_>>,
    end_line: usize,
    section: &'static str,
) -> Result<Vector2D, ParseError> {
    let directive = directive.ok_or(ParseError::MissingSection {
        line: end_line,
        section,
    })?;

    let [x, y] = directive.fields[..] else {
        return Err(ParseError::FieldCount {
            line: directive.line,
            expected: "2",
            found: directive.fields.len(),
        });
    };

    Ok(Vector2D::new(
        parse_number(x, directive.line)?,
        parse_number(y, directive.line)?,
    ))
}

fn parse_affine(directive: &Directive<'_>) -> Result<AffineTransform2D, ParseError> {
    let count = directive.fields.len();

    if count != 6 && count != 7 {
        return Err(ParseError::FieldCount {
            line: directive.line,
            expected: "6 or 7",
            found: count,
        });
    }

    let values = directive
        .fields
        .iter()
        .map(|field| parse_number(field, directive.line))
        .collect::<Result<Vec<f64>, _>>()?;

    let transform = AffineTransform2D::new(
        Matrix2x2::new(values[0], values[1], values[2], values[3]),
        Vector2D::new(values[4], values[5]),
    );

    Ok(match values.get(6) {
        Some(&weight) => transform.with_weight(weight),
        None => transform,
    })
}

fn parse_julia(directive: &Directive<'_>) -> Result<JuliaTransform, ParseError> {
    let (real, imag, sign) = match directive.fields[..] {
        [real, imag] => (real, imag, None),
        [real, imag, sign] => (real, imag, Some(sign)),
        _ => {
            return Err(ParseError::FieldCount {
                line: directive.line,
                expected: "2 or 3",
                found: directive.fields.len(),
            });
        }
    };

    let c = Complex {
        real: parse_number(real, directive.line)?,
        imag: parse_number(imag, directive.line)?,
    };

    let sign = match sign {
        Some(value) => value.parse::<Sign>().map_err(|_| ParseError::InvalidSign {
            line: directive.line,
            value: value.to_string(),
        })?,
        None => Sign::Random,
    };

    Ok(JuliaTransform::new(c, sign))
}

fn parse_number(field: &str, line: usize) -> Result<f64, ParseError> {
    field.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}

/// Renders `description` in the file format. `f64` display is the shortest
/// string that parses back to the same value, so affine descriptions
/// round-trip exactly.
pub fn serialize(description: &ChaosGameDescription) -> Result<String, DescriptionFileError> {
    let transforms = description.transforms();

    let kind = match (transforms.is_empty(), description.kind()) {
        (true, _) => TransformKind::Affine2D,
        (false, Some(kind)) => kind,
        (false, None) => return Err(DescriptionFileError::MixedTransformKinds),
    };

    if kind == TransformKind::Julia && transforms.len() > 1 {
        return Err(DescriptionFileError::MultipleJuliaTransforms(transforms.len()));
    }

    let min = description.min_coords();
    let max = description.max_coords();

    let mut lines = vec![
        format!("{} # Type of transform", kind.header()),
        format!("{} # Min x, min y", join(&[min.x, min.y])),
        format!("{} # Max x, max y", join(&[max.x, max.y])),
    ];

    for (index, transform) in transforms.iter().enumerate() {
        let line = match transform {
            Transform::Affine(affine) => {
                let m = affine.matrix();
                let t = affine.translation();
                let mut fields = vec![m.a00, m.a01, m.a10, m.a11, t.x, t.y];

                if affine.weight() != DEFAULT_WEIGHT {
                    fields.push(affine.weight());
                }

                format!("{} # Transform {}", join(&fields), index + 1)
            }
            Transform::Julia(julia) => {
                let c = julia.c();
                let fields = join(&[c.real, c.imag]);

                match julia.sign() {
                    Sign::Random => format!("{fields} # Real and imaginary parts of c"),
                    Sign::Positive => format!("{fields}{FIELD_SEPARATOR}1 # c, sign"),
                    Sign::Negative => format!("{fields}{FIELD_SEPARATOR}-1 # c, sign"),
                }
            }
        };

        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::factory::{
        affine_custom, barnsley_fern, description_factory, julia_custom, sierpinski_triangle,
    };
    use crate::core::fractals::presets::FractalPreset;
    use std::path::PathBuf;

    struct TempFile(PathBuf);

    impl TempFile {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "chaos_game_{}_{}.txt",
                std::process::id(),
                name
            ));
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    const SIERPINSKI_FILE: &str = "\
Affine2D # Type of transform
0, 0 # Lower left
1, 1 # Upper right
0.5, 0, 0, 0.5, 0, 0 # First transform
0.5, 0, 0, 0.5, 0.5, 0
0.5, 0, 0, 0.5, 0.25, 0.5
";

    #[test]
    fn test_parse_affine_file() {
        let description = parse(SIERPINSKI_FILE).unwrap();

        assert_eq!(description.min_coords(), Vector2D::new(0.0, 0.0));
        assert_eq!(description.max_coords(), Vector2D::new(1.0, 1.0));
        assert_eq!(description.transforms().len(), 3);
        assert_eq!(
            description.transforms()[2],
            Transform::Affine(AffineTransform2D::new(
                Matrix2x2::new(0.5, 0.0, 0.0, 0.5),
                Vector2D::new(0.25, 0.5)
            ))
        );
        assert_eq!(description.weights(), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_parse_tolerates_whitespace_separators_and_blank_lines() {
        let text = "\n  affine2d  \n\n 0 0\n\t1   1 \n\n0.5 0 0 0.5 0 0 2.5\n\n";
        let description = parse(text).unwrap();

        assert_eq!(description.max_coords(), Vector2D::new(1.0, 1.0));
        assert_eq!(description.weights(), vec![2.5]);
    }

    #[test]
    fn test_parse_julia_file() {
        let text = "Julia\n-1.6, -1\n1.6, 1\n-0.74543, 0.11301\n";
        let description = parse(text).unwrap();

        assert_eq!(
            description.transforms(),
            &[Transform::Julia(JuliaTransform::new(
                Complex {
                    real: -0.74543,
                    imag: 0.11301
                },
                Sign::Random
            ))]
        );
    }

    #[test]
    fn test_parse_julia_with_sign() {
        let text = "Julia\n-1.6, -1\n1.6, 1\n0.3, 0.6, -1\n";
        let description = parse(text).unwrap();
        let Transform::Julia(julia) = description.transforms()[0] else {
            panic!("expected julia transform");
        };

        assert_eq!(julia.sign(), Sign::Negative);
    }

    #[test]
    fn test_affine_line_with_five_numbers_is_rejected() {
        let text = "Affine2D\n0, 0\n1, 1\n0.5, 0, 0, 0.5, 0, 0\n0.5, 0, 0, 0.5, 0.5\n";

        assert_eq!(
            parse(text),
            Err(ParseError::FieldCount {
                line: 5,
                expected: "6 or 7",
                found: 5
            })
        );
    }

    #[test]
    fn test_affine_line_with_eight_numbers_is_rejected() {
        let text = "Affine2D\n0, 0\n1, 1\n1, 2, 3, 4, 5, 6, 7, 8\n";

        assert!(matches!(
            parse(text),
            Err(ParseError::FieldCount { line: 4, found: 8, .. })
        ));
    }

    #[test]
    fn test_unknown_header_is_rejected() {
        let text = "# a comment only line\nMandelbrot\n0, 0\n1, 1\n";

        assert_eq!(
            parse(text),
            Err(ParseError::UnknownTransformType {
                line: 2,
                found: "Mandelbrot".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_coordinates_are_rejected() {
        let text = "Affine2D\n0, zero\n1, 1\n";

        assert_eq!(
            parse(text),
            Err(ParseError::InvalidNumber {
                line: 2,
                value: "zero".to_string()
            })
        );
    }

    #[test]
    fn test_coordinate_pair_with_three_values_is_rejected() {
        let text = "Affine2D\n0, 0\n1, 1, 1\n";

        assert_eq!(
            parse(text),
            Err(ParseError::FieldCount {
                line: 3,
                expected: "2",
                found: 3
            })
        );
    }

    #[test]
    fn test_missing_max_coordinates() {
        let text = "Julia\n-1, -1\n";
        let err = parse(text).unwrap_err();

        assert!(matches!(
            err,
            ParseError::MissingSection {
                section: "maximum coordinates",
                ..
            }
        ));
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_empty_text_is_missing_header() {
        assert!(matches!(
            parse(""),
            Err(ParseError::MissingSection { line: 1, .. })
        ));
    }

    #[test]
    fn test_second_julia_line_is_rejected() {
        let text = "Julia\n-1.6, -1\n1.6, 1\n0.1, 0.2\n0.3, 0.4\n";

        assert_eq!(parse(text), Err(ParseError::UnexpectedLine { line: 5 }));
    }

    #[test]
    fn test_julia_with_wrong_arity_is_rejected() {
        let text = "Julia\n-1.6, -1\n1.6, 1\n0.1\n";

        assert!(matches!(
            parse(text),
            Err(ParseError::FieldCount { line: 4, found: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_julia_sign_is_rejected() {
        let text = "Julia\n-1.6, -1\n1.6, 1\n0.1, 0.2, 2\n";

        assert_eq!(
            parse(text),
            Err(ParseError::InvalidSign {
                line: 4,
                value: "2".to_string()
            })
        );
    }

    #[test]
    fn test_header_only_file_parses_with_no_transforms() {
        let description = parse("Affine2D\n0, 0\n1, 1\n").unwrap();

        assert!(description.transforms().is_empty());
    }

    #[test]
    fn test_serialize_format() {
        let text = serialize(&parse(SIERPINSKI_FILE).unwrap()).unwrap();

        assert_eq!(
            text,
            "Affine2D # Type of transform\n\
             0, 0 # Min x, min y\n\
             1, 1 # Max x, max y\n\
             0.5, 0, 0, 0.5, 0, 0 # Transform 1\n\
             0.5, 0, 0, 0.5, 0.5, 0 # Transform 2\n\
             0.5, 0, 0, 0.5, 0.25, 0.5 # Transform 3\n"
        );
    }

    #[test]
    fn test_serialize_rejects_mixed_kinds() {
        let mut transforms = sierpinski_triangle().transforms().to_vec();
        transforms.push(JuliaTransform::new(Complex::default(), Sign::Random).into());
        let mixed = ChaosGameDescription::new(Vector2D::ORIGIN, Vector2D::new(1.0, 1.0), transforms);

        assert!(matches!(
            serialize(&mixed),
            Err(DescriptionFileError::MixedTransformKinds)
        ));
    }

    #[test]
    fn test_affine_round_trip_is_exact() {
        let awkward = affine_custom(
            Vector2D::new(-2.5e-3, -1.0 / 3.0),
            Vector2D::new(123456.789, 0.1 + 0.2),
            vec![
                AffineTransform2D::new(
                    Matrix2x2::new(0.85, 0.04, -0.04, 0.85),
                    Vector2D::new(1e-9, 1.6),
                )
                .with_weight(0.1 + 0.7),
                AffineTransform2D::new(Matrix2x2::new(-0.0, 1e300, -1e-300, 2.0 / 3.0), Vector2D::ORIGIN),
            ],
        );

        for description in [sierpinski_triangle(), barnsley_fern(), awkward] {
            let text = serialize(&description).unwrap();
            assert_eq!(parse(&text), Ok(description));
        }
    }

    #[test]
    fn test_julia_round_trip_keeps_c_and_sign() {
        for sign in [Sign::Random, Sign::Positive, Sign::Negative] {
            let description = julia_custom(
                Vector2D::new(-1.6, -1.0),
                Vector2D::new(1.6, 1.0),
                Complex {
                    real: -0.70176,
                    imag: -0.3842,
                },
                sign,
            );
            let text = serialize(&description).unwrap();

            assert_eq!(parse(&text), Ok(description));
        }
    }

    #[test]
    fn test_every_preset_round_trips_through_a_file() {
        for &preset in FractalPreset::ALL {
            let file = TempFile::new(preset.name());
            let description = description_factory(preset);

            write(&description, &file.0).unwrap();

            assert_eq!(read(&file.0).unwrap(), description, "{}", preset);
        }
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let file = TempFile::new("does_not_exist");

        let result = read(&file.0);

        assert!(matches!(
            result,
            Err(DescriptionFileError::Io { ref path, .. }) if *path == file.0
        ));
    }

    #[test]
    fn test_read_malformed_file_is_parse_error() {
        let file = TempFile::new("malformed");
        fs::write(&file.0, "Affine2D\n0, 0\n1, 1\n0.5, 0, 0, 0.5, 0\n").unwrap();

        let result = read(&file.0);

        assert!(matches!(
            result,
            Err(DescriptionFileError::Parse(ParseError::FieldCount { line: 4, .. }))
        ));
    }

    #[test]
    fn test_write_into_missing_directory_is_io_error() {
        let path = std::env::temp_dir()
            .join(format!("chaos_game_missing_dir_{}", std::process::id()))
            .join("out.txt");

        let result = write(&sierpinski_triangle(), &path);

        assert!(matches!(result, Err(DescriptionFileError::Io { .. })));
    }
}
