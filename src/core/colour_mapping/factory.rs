use crate::core::colour_mapping::kinds::DensityColourMapKind;
use crate::core::colour_mapping::map::DensityColourMap;
use crate::core::colour_mapping::maps::binary::BinaryColourMap;
use crate::core::colour_mapping::maps::fire_gradient::FireGradientColourMap;
use crate::core::colour_mapping::maps::log_grayscale::LogGrayscaleColourMap;

#[must_use]
pub fn density_colour_map_factory(kind: DensityColourMapKind) -> Box<dyn DensityColourMap> {
    match kind {
        DensityColourMapKind::Binary => Box::new(BinaryColourMap),
        DensityColourMapKind::LogGrayscale => Box::new(LogGrayscaleColourMap),
        DensityColourMapKind::FireGradient => Box::new(FireGradientColourMap),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            DensityColourMapKind::ALL.first(),
            Some(&DensityColourMapKind::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in DensityColourMapKind::ALL {
            let map = density_colour_map_factory(kind);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_match_between_kind_and_concrete() {
        for &kind in DensityColourMapKind::ALL {
            let map = density_colour_map_factory(kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn names_parse_back_to_kind() {
        for &kind in DensityColourMapKind::ALL {
            assert_eq!(kind.name().parse::<DensityColourMapKind>(), Ok(kind));
        }
        assert!("rainbow".parse::<DensityColourMapKind>().is_err());
    }
}
