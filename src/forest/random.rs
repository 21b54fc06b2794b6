// src/forest/random.rs
//! Uniform draws on [0, 1) and the small integer helpers built on them.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws on [0, 1). The populator only ever consumes draws.
pub trait UniformSource: Send + Sync + 'static {
    fn next_unit(&mut self) -> f64;
}

/// Deterministic per seed; what the app uses.
pub struct SeededUniform(ChaCha8Rng);

impl SeededUniform {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl UniformSource for SeededUniform {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// The scene's random source, as a resource.
#[derive(Resource)]
pub struct SceneRng(pub Box<dyn UniformSource>);

impl SceneRng {
    pub fn new(source: impl UniformSource) -> Self {
        Self(Box::new(source))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededUniform::new(seed))
    }
}

/// `floor(U * range) + base`.
#[inline]
pub fn draw_int(src: &mut dyn UniformSource, range: f64, base: f64) -> f64 {
    (src.next_unit() * range).floor() + base
}

/// −1 or +1 with equal probability: `−1 + round(U) * 2`.
#[inline]
pub fn random_sign(src: &mut dyn UniformSource) -> f64 {
    -1.0 + src.next_unit().round() * 2.0
}

/// Deterministic sources for tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::UniformSource;
    use std::collections::VecDeque;

    /// Always returns the same draw.
    pub struct FixedUniform(pub f64);

    impl UniformSource for FixedUniform {
        fn next_unit(&mut self) -> f64 { self.0 }
    }

    /// Replays a script, then repeats `fallback`.
    pub struct ScriptedUniform {
        pub script: VecDeque<f64>,
        pub fallback: f64,
        pub consumed: usize,
    }

    impl ScriptedUniform {
        pub fn new(script: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
            Self { script: script.into_iter().collect(), fallback, consumed: 0 }
        }
    }

    impl UniformSource for ScriptedUniform {
        fn next_unit(&mut self) -> f64 {
            self.consumed += 1;
            self.script.pop_front().unwrap_or(self.fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FixedUniform;
    use super::*;

    #[test]
    fn sign_maps_low_and_high_halves() {
        assert_eq!(random_sign(&mut FixedUniform(0.0)), -1.0);
        assert_eq!(random_sign(&mut FixedUniform(0.49)), -1.0);
        assert_eq!(random_sign(&mut FixedUniform(0.5)), 1.0);
        assert_eq!(random_sign(&mut FixedUniform(0.999)), 1.0);
    }

    #[test]
    fn sign_is_balanced() {
        let mut src = SeededUniform::new(42);
        let n = 20_000;
        let mut plus = 0;
        for _ in 0..n {
            let s = random_sign(&mut src);
            assert!(s == 1.0 || s == -1.0);
            if s > 0.0 { plus += 1; }
        }
        let ratio = plus as f64 / n as f64;
        assert!((ratio - 0.5).abs() < 0.02, "ratio {ratio}");
    }

    #[test]
    fn draw_int_stays_in_range() {
        let mut src = SeededUniform::new(3);
        for _ in 0..5_000 {
            let v = draw_int(&mut src, 50.0, 10.0);
            assert!((10.0..=59.0).contains(&v));
            assert_eq!(v, v.floor());
        }
        assert_eq!(draw_int(&mut FixedUniform(0.999_999), 8.0, 2.0), 9.0);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededUniform::new(1337);
        let mut b = SeededUniform::new(1337);
        for _ in 0..64 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}
