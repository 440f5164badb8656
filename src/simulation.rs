use crate::physics::{ElectronSwarm, Photocell};

/// One photocell and the electrons it has released.
pub struct Simulation {
    pub photocell: Photocell,
    pub electrons: ElectronSwarm,
}

impl Simulation {
    pub fn new(photocell: Photocell) -> Self {
        Self {
            photocell,
            electrons: ElectronSwarm::new(),
        }
    }

    /// Runs one frame: emission first, then transport of the electrons that
    /// were already in flight, then the newcomers join the swarm.
    pub fn step(&mut self, time_delta: f64) {
        let spawned = self.photocell.advance(time_delta);
        self.electrons.advance(time_delta, self.photocell.voltage());
        self.electrons.adopt(spawned);
    }
}
