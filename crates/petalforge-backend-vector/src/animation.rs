//! Frame-driven transitions between parameter sets.
//!
//! [`AnimationDriver`] owns the curves currently on screen and the target
//! curves of the running transition. The host calls [`AnimationDriver::advance`]
//! once per frame and reads paths back with [`AnimationDriver::current_path`].
//!
//! ```
//! use petalforge_backend_vector::animation::{AnimationDriver, DriverState};
//! use petalforge_spec::ParameterSet;
//!
//! let mut driver = AnimationDriver::new(ParameterSet::default(), 400.0);
//! driver.set_params(ParameterSet { waviness: 1.2, ..Default::default() });
//! assert_eq!(driver.state(), DriverState::Transitioning);
//!
//! while driver.state() == DriverState::Transitioning {
//!     driver.advance(16.0);
//! }
//! assert_eq!(driver.progress(), 1.0);
//! ```

use log::{debug, trace};
use petalforge_spec::ParameterSet;

use crate::easing::Easing;
use crate::generate::generate_curves;
use crate::geometry::Curve;
use crate::morph::{build_interpolators, MorphSet};
use crate::path::{Path, PathBuilder};

/// Eased progress at which a transition snaps to its target.
pub const SETTLE_THRESHOLD: f64 = 0.99;

/// Whether a transition is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Paths are built straight from the target curves.
    Settled,
    /// Paths are built from interpolated curves each tick.
    Transitioning,
}

impl DriverState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverState::Settled => "settled",
            DriverState::Transitioning => "transitioning",
        }
    }
}

/// Owns the animation context for one rendered logo.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    params: ParameterSet,
    size: f64,
    easing: Easing,
    builder: PathBuilder,
    /// Curves generated from `params`.
    target: Vec<Curve>,
    /// Interpolated curves on screen while transitioning.
    frame: Vec<Curve>,
    morph: Option<MorphSet>,
    paths: Vec<Path>,
    elapsed_ms: f64,
    duration_ms: f64,
    progress: f64,
}

impl AnimationDriver {
    /// Creates a settled driver showing `params` on a `size x size` canvas.
    pub fn new(params: ParameterSet, size: f64) -> Self {
        let params = params.clamped();
        let size = sanitize_size(size);
        let target = generate_curves(&params, size);
        let builder = PathBuilder::default();
        let mut paths = Vec::with_capacity(target.len());
        rebuild_paths(&builder, &target, &mut paths);
        debug!(
            "driver created: {} curves at size {}",
            target.len(),
            size
        );
        Self {
            params,
            size,
            easing: Easing::default(),
            builder,
            target,
            frame: Vec::new(),
            morph: None,
            paths,
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            progress: 1.0,
        }
    }

    /// Replaces the easing curve used by subsequent ticks.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Replaces the path builder (and its tension). Rebuilds current paths.
    pub fn with_path_builder(mut self, builder: PathBuilder) -> Self {
        self.builder = builder;
        let curves = if self.morph.is_some() {
            &self.frame
        } else {
            &self.target
        };
        rebuild_paths(&self.builder, curves, &mut self.paths);
        self
    }

    /// Points the driver at a new parameter set.
    ///
    /// The input is clamped first. Returns `false` if the clamped set equals
    /// the current target, in which case nothing changes. Otherwise the new
    /// curves are generated and either a transition starts from whatever is
    /// on screen, or the driver settles directly when the curve counts differ
    /// or the duration is zero.
    pub fn set_params(&mut self, params: ParameterSet) -> bool {
        let params = params.clamped();
        if params == self.params {
            return false;
        }
        let next = generate_curves(&params, self.size);
        let duration_ms = f64::from(params.animation_duration_ms);
        self.params = params;

        let morph = if duration_ms > 0.0 {
            build_interpolators(self.curves(), &next)
        } else {
            None
        };

        match morph {
            Some(morph) => {
                if self.morph.is_some() {
                    debug!(
                        "transition restarted at progress {:.3}",
                        self.progress
                    );
                }
                debug!(
                    "transition started: {} curves over {} ms",
                    next.len(),
                    duration_ms
                );
                self.target = next;
                self.elapsed_ms = 0.0;
                self.duration_ms = duration_ms;
                self.progress = 0.0;
                morph.write_into(0.0, &mut self.frame);
                self.morph = Some(morph);
                rebuild_paths(&self.builder, &self.frame, &mut self.paths);
            }
            None => {
                debug!(
                    "snapping to {} curves (was {}, duration {} ms)",
                    next.len(),
                    self.curves().len(),
                    duration_ms
                );
                self.target = next;
                self.settle();
            }
        }
        true
    }

    /// Advances a running transition by `delta_ms` and returns the eased
    /// progress.
    ///
    /// Negative or non-finite deltas count as zero. While settled this
    /// returns `1.0` without doing any work.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        let Some(morph) = self.morph.as_ref() else {
            return 1.0;
        };
        let delta = if delta_ms.is_finite() && delta_ms > 0.0 {
            delta_ms
        } else {
            0.0
        };
        self.elapsed_ms += delta;
        let linear = if self.duration_ms > 0.0 {
            self.elapsed_ms / self.duration_ms
        } else {
            1.0
        };
        let eased = self.easing.apply(linear);

        if eased >= SETTLE_THRESHOLD {
            debug!("transition settled after {:.1} ms", self.elapsed_ms);
            self.settle();
            return self.progress;
        }

        morph.write_into(eased, &mut self.frame);
        rebuild_paths(&self.builder, &self.frame, &mut self.paths);
        self.progress = eased;
        trace!(
            "tick: elapsed {:.1} ms, progress {:.4}",
            self.elapsed_ms,
            eased
        );
        eased
    }

    /// Path for curve `index`, or `None` past the end.
    pub fn current_path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Curves currently on screen.
    pub fn curves(&self) -> &[Curve] {
        if self.morph.is_some() {
            &self.frame
        } else {
            &self.target
        }
    }

    /// Curves the driver is heading towards (equal to `curves()` when settled).
    pub fn target_curves(&self) -> &[Curve] {
        &self.target
    }

    pub fn state(&self) -> DriverState {
        if self.morph.is_some() {
            DriverState::Transitioning
        } else {
            DriverState::Settled
        }
    }

    /// Eased progress in `[0, 1]`; `1.0` when settled.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Resizes the canvas. Any running transition is dropped and the driver
    /// settles on curves regenerated at the new size.
    pub fn set_size(&mut self, size: f64) {
        let size = sanitize_size(size);
        if size == self.size {
            return;
        }
        debug!("resizing canvas {} -> {}", self.size, size);
        self.size = size;
        self.target = generate_curves(&self.params, size);
        self.settle();
    }

    fn settle(&mut self) {
        self.morph = None;
        self.frame.clear();
        self.elapsed_ms = 0.0;
        self.duration_ms = 0.0;
        self.progress = 1.0;
        rebuild_paths(&self.builder, &self.target, &mut self.paths);
    }
}

fn sanitize_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        0.0
    }
}

fn rebuild_paths(builder: &PathBuilder, curves: &[Curve], paths: &mut Vec<Path>) {
    paths.truncate(curves.len());
    for (idx, curve) in curves.iter().enumerate() {
        match paths.get_mut(idx) {
            Some(path) => builder.rebuild(&curve.points, path),
            None => paths.push(builder.build(&curve.points)),
        }
    }
}
