use bevy_ecs::prelude::Resource;

/// Random source for scramble turns. Seed it to replay a scramble.
#[derive(Resource, Debug, Clone)]
pub struct ScrambleRng(pub fastrand::Rng);

impl Default for ScrambleRng {
    fn default() -> Self {
        ScrambleRng(fastrand::Rng::new())
    }
}

impl ScrambleRng {
    pub fn with_seed(seed: u64) -> Self {
        ScrambleRng(fastrand::Rng::with_seed(seed))
    }
}
