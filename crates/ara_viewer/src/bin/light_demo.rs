//! Reticle placement with host light estimation.
//!
//! Same tracking loop as the main demo, plus the ambient-light switch: the
//! simulated host starts publishing light estimates partway through the
//! run and stops again before the end, and the scene swaps between the
//! default hemisphere light and the estimated probe light accordingly.

use anyhow::Result;
use ara_host::{FrameContext, SessionConfig, SimSession, SimSurface, SurfaceConfig};
use ara_scene::{AmbientLightSwitcher, HemisphereLight, Scene};
use ara_xr::{LightEstimationQueue, ReticleTracker};

struct App {
    scene: Scene,
    tracker: ReticleTracker,
    switcher: AmbientLightSwitcher,
    lights: LightEstimationQueue,
}

impl App {
    fn new(lights: LightEstimationQueue) -> Self {
        Self {
            scene: Scene::demo("light-demo"),
            tracker: ReticleTracker::new(),
            switcher: AmbientLightSwitcher::new(HemisphereLight::default()),
            lights,
        }
    }

    fn on_frame(&mut self, ctx: &FrameContext<'_>) {
        let was_estimated = self.scene.ambient.is_estimated();
        self.switcher.pump(&self.lights, &mut self.scene);
        if self.scene.ambient.is_estimated() != was_estimated {
            log::info!(
                "frame {}: ambient light is now {}",
                ctx.index,
                if self.scene.ambient.is_estimated() { "estimated" } else { "default" }
            );
        }

        self.tracker
            .on_frame(ctx.session, &ctx.frame, ctx.reference_space, &mut self.scene.reticle);

        if ctx.presenting {
            log::debug!(
                "frame {}: drawing {} nodes, reticle {}, environment map {}",
                ctx.index,
                self.scene.node_count(),
                if self.scene.reticle.visible { "visible" } else { "hidden" },
                if self.scene.environment.is_some() { "installed" } else { "absent" }
            );
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting ARA light-estimation demo");

    let session = SimSession::new(SessionConfig {
        estimation_start_frame: Some(30),
        estimation_end_frame: Some(70),
        ..Default::default()
    });
    let lights = session.lights();
    let mut surface = SimSurface::new(session, SurfaceConfig::default());
    let mut app = App::new(lights);

    surface.run_frames(90, |ctx| app.on_frame(ctx));

    log::info!(
        "run complete: tracker {:?}, ambient {}",
        app.tracker.state(),
        if app.scene.ambient.is_estimated() { "estimated" } else { "default" }
    );
    Ok(())
}
