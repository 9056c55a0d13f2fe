use life_engine::coords::Viewport;
use life_engine::render::board::BoardStyle;
use life_engine::window::{LogicalSize, RuntimeConfig};

/// Startup parameters of the simulator.
#[derive(Debug, Clone)]
pub struct LifeConfig {
    pub xrows: usize,
    pub yrows: usize,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// Fixed seed for the initial board; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub style: BoardStyle,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            xrows: 128,
            yrows: 128,
            width: 720,
            height: 720,
            target_fps: 1000,
            seed: None,
            style: BoardStyle::default(),
        }
    }
}

impl LifeConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: "Conway's Game of Life".to_string(),
            initial_size: LogicalSize::new(self.width as f64, self.height as f64),
            resizable: false,
            target_fps: self.target_fps,
        }
    }
}
