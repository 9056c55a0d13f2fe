use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use life_engine::core::{App, AppControl, FrameCtx};
use life_engine::render::board::{BoardCache, BoardLayout, BoardStyle};
use life_engine::sim::Engine;

/// Generations between `info` summaries.
const REPORT_EVERY: u64 = 500;

/// Per-frame orchestration: draw the current generation, then advance it.
pub struct LifeApp {
    engine: Engine,
    layout: BoardLayout,
    style: BoardStyle,

    /// Built on the first frame, once a device exists.
    cache: Option<BoardCache>,

    stats: FrameStats,
}

impl LifeApp {
    pub fn new(engine: Engine, layout: BoardLayout, style: BoardStyle) -> Self {
        debug_assert_eq!(engine.dimensions(), layout.dimensions());
        Self {
            engine,
            layout,
            style,
            cache: None,
            stats: FrameStats::default(),
        }
    }
}

impl App for LifeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let Self { engine, layout, style, cache, stats } = self;

        let cache = cache.get_or_insert_with(|| {
            let rctx = ctx.gpu.render_ctx();
            BoardCache::build(&rctx, *layout, *style)
        });

        let render_start = Instant::now();
        let mut drawn = 0;
        ctx.render(|rctx, target| {
            drawn = cache.render_frame(rctx, target, engine.current_grid());
        })
        .with_context(|| format!("rendering generation {}", engine.generation()))?;
        let render_time = render_start.elapsed();

        let step_start = Instant::now();
        engine.step();
        let step_time = step_start.elapsed();

        stats.record(render_time, step_time);
        log::debug!(
            "generation {} | frame {:.0} fps (dt {:.2}ms) | render {render_time:.2?} | step {step_time:.2?} | live {drawn}",
            engine.generation(),
            ctx.time.fps(),
            ctx.time.dt * 1000.0,
        );

        if engine.generation() % REPORT_EVERY == 0 {
            log::info!(
                "generation {} | live {} | avg render {:.2?} | avg step {:.2?}",
                engine.generation(),
                engine.current_grid().live_count(),
                stats.mean_render(),
                stats.mean_step(),
            );
            stats.reset();
        }

        Ok(AppControl::Continue)
    }

    fn on_exit(&mut self) {
        log::info!("stopped after {} generations", self.engine.generation());
        // Drop GPU buffers while the device is still alive.
        self.cache = None;
    }
}

/// Running totals between reports.
#[derive(Debug, Default)]
struct FrameStats {
    frames: u32,
    render: Duration,
    step: Duration,
}

impl FrameStats {
    fn record(&mut self, render: Duration, step: Duration) {
        self.frames += 1;
        self.render += render;
        self.step += step;
    }

    fn mean_render(&self) -> Duration {
        self.render.checked_div(self.frames).unwrap_or_default()
    }

    fn mean_step(&self) -> Duration {
        self.step.checked_div(self.frames).unwrap_or_default()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_average_recorded_frames() {
        let mut s = FrameStats::default();
        s.record(Duration::from_millis(2), Duration::from_millis(4));
        s.record(Duration::from_millis(4), Duration::from_millis(8));
        assert_eq!(s.mean_render(), Duration::from_millis(3));
        assert_eq!(s.mean_step(), Duration::from_millis(6));
        s.reset();
        assert_eq!(s.mean_step(), Duration::ZERO);
    }
}
