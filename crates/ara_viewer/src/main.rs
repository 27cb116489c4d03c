//! Reticle placement demo.
//!
//! Runs the surface-hit tracking loop against the simulated host: the
//! scripted viewer starts looking above the horizon and tilts down until
//! the floor comes into range, at which point the reticle appears and
//! follows the hit point. Ending the session shows the tracker resetting.

use anyhow::Result;
use ara_host::{FrameContext, SessionConfig, SimSession, SimSurface, SurfaceConfig};
use ara_scene::Scene;
use ara_xr::ReticleTracker;

struct App {
    scene: Scene,
    tracker: ReticleTracker,
    was_visible: bool,
}

impl App {
    fn new() -> Self {
        Self {
            scene: Scene::demo("reticle-demo"),
            tracker: ReticleTracker::new(),
            was_visible: false,
        }
    }

    fn on_frame(&mut self, ctx: &FrameContext<'_>) {
        self.tracker
            .on_frame(ctx.session, &ctx.frame, ctx.reference_space, &mut self.scene.reticle);

        if self.scene.reticle.visible != self.was_visible {
            self.was_visible = self.scene.reticle.visible;
            if self.was_visible {
                let p = self.scene.reticle.position();
                log::info!(
                    "frame {}: surface found, reticle at ({:.2}, {:.2}, {:.2})",
                    ctx.index,
                    p.x,
                    p.y,
                    p.z
                );
            } else {
                log::info!("frame {}: surface lost, reticle hidden", ctx.index);
            }
        }

        // Only render while an immersive presentation is active
        if ctx.presenting {
            render(&self.scene, ctx.index);
        }
    }
}

fn render(scene: &Scene, frame: u64) {
    log::debug!(
        "frame {frame}: drawing {} nodes, reticle {}",
        scene.node_count(),
        if scene.reticle.visible { "visible" } else { "hidden" }
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting ARA reticle demo");

    let session = SimSession::new(SessionConfig::default());
    let mut surface = SimSurface::new(session, SurfaceConfig::default());
    let mut app = App::new();

    surface.run_frames(90, |ctx| app.on_frame(ctx));

    log::info!("tracker state after 90 frames: {:?}", app.tracker.state());

    // End the session: the tracker releases its hit-test source and the
    // reticle disappears
    surface.end_session();
    surface.run_frames(2, |ctx| app.on_frame(ctx));

    log::info!("tracker state after session end: {:?}", app.tracker.state());
    Ok(())
}
