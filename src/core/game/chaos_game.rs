use log::{debug, warn};
use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_STEPS, CancelToken, Cancelled};
use crate::core::canvas::canvas::Canvas;
use crate::core::data::vector2d::Vector2D;
use crate::core::description::description::ChaosGameDescription;
use crate::core::description::errors::InvalidDescriptionError;

/// Every game starts iterating from here, whatever its window.
pub const START_POINT: Vector2D = Vector2D::ORIGIN;

/// Runs the chaos game for one description onto an exclusively owned canvas.
///
/// Transform selection and random Julia signs share a single RNG stream, so
/// `run_steps(a)` followed by `run_steps(b)` leaves the same canvas as
/// `run_steps(a + b)`.
#[derive(Debug, Clone)]
pub struct ChaosGame {
    description: ChaosGameDescription,
    canvas: Canvas,
    current_point: Vector2D,
    rng: StdRng,
    // None when there is a single transform: nothing to draw for.
    selector: Option<WeightedIndex<f64>>,
    steps_taken: u64,
}

impl ChaosGame {
    /// Builds a game seeded from OS entropy.
    pub fn new(
        description: ChaosGameDescription,
        width: usize,
        height: usize,
    ) -> Result<Self, InvalidDescriptionError> {
        Self::with_rng(description, width, height, StdRng::from_entropy())
    }

    /// Builds a game whose whole run is reproducible from `seed`.
    pub fn with_seed(
        description: ChaosGameDescription,
        width: usize,
        height: usize,
        seed: u64,
    ) -> Result<Self, InvalidDescriptionError> {
        Self::with_rng(description, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        description: ChaosGameDescription,
        width: usize,
        height: usize,
        rng: StdRng,
    ) -> Result<Self, InvalidDescriptionError> {
        description.validate()?;

        let canvas = Canvas::new(
            width,
            height,
            description.min_coords(),
            description.max_coords(),
        )?;

        let selector = if description.transforms().len() > 1 {
            let selector = WeightedIndex::new(description.weights())
                .map_err(|_| InvalidDescriptionError::UnsampleableWeights {
                    total: description.weights().iter().sum(),
                })?;
            Some(selector)
        } else {
            None
        };

        debug!(
            "chaos game created: {} transforms, {}x{} canvas",
            description.transforms().len(),
            width,
            height
        );

        Ok(Self {
            description,
            canvas,
            current_point: START_POINT,
            rng,
            selector,
            steps_taken: 0,
        })
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn description(&self) -> &ChaosGameDescription {
        &self.description
    }

    #[must_use]
    pub fn current_point(&self) -> Vector2D {
        self.current_point
    }

    #[must_use]
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn run_steps(&mut self, steps: u64) {
        let non_finite = (0..steps).filter(|_| !self.step()).count();

        self.finish_batch(steps, non_finite);
    }

    /// Like [`ChaosGame::run_steps`], checking `cancel` every
    /// [`CANCEL_CHECK_INTERVAL_STEPS`] steps. Steps already taken stay on the
    /// canvas when cancelled.
    pub fn run_steps_cancelable<C: CancelToken + ?Sized>(
        &mut self,
        steps: u64,
        cancel: &C,
    ) -> Result<(), Cancelled> {
        let mut done = 0;
        let mut non_finite = 0;

        while done < steps {
            if cancel.is_cancelled() {
                self.finish_batch(done, non_finite);
                return Err(Cancelled);
            }

            let chunk = CANCEL_CHECK_INTERVAL_STEPS.min(steps - done);
            non_finite += (0..chunk).filter(|_| !self.step()).count();
            done += chunk;
        }

        self.finish_batch(done, non_finite);
        Ok(())
    }

    /// Clears the canvas and moves back to [`START_POINT`]. The RNG stream
    /// carries on where it was.
    pub fn reset(&mut self) {
        self.canvas.clear();
        self.current_point = START_POINT;
        self.steps_taken = 0;
    }

    /// Advances one step and plots the new point; returns false when that
    /// point has a NaN component.
    fn step(&mut self) -> bool {
        let index = self.next_transform_index();
        let transform = self.description.transforms()[index];

        self.current_point = transform.apply(self.current_point, &mut self.rng);
        self.steps_taken += 1;
        self.canvas.mark_point(self.current_point);

        !self.current_point.is_nan()
    }

    fn next_transform_index(&mut self) -> usize {
        match &self.selector {
            Some(selector) => selector.sample(&mut self.rng),
            None => 0,
        }
    }

    fn finish_batch(&self, steps: u64, non_finite: usize) {
        if non_finite > 0 {
            warn!("{} of {} iterates were NaN", non_finite, steps);
        }

        debug!(
            "ran {} steps ({} total), current point {}",
            steps, self.steps_taken, self.current_point
        );
    }
}
