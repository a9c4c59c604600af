//! platform_winit: window + input plumbing for the navigation session
//! (winit 0.30).
//!
//! Creates a window, owns pointer lock, translates raw winit events into
//! core input events, and drives `NavSession::tick` once per frame. A small
//! demo world applies `Discover` and logs `Activate` — standing in for the
//! storage/audio collaborators — and a [`PoseSink`] receives the per-frame
//! snapshot on the renderer's behalf.

use anyhow::Result;
use glam::Vec3;
use nav_core::input::MoveAxis;
use nav_core::session::{NavConfig, NavSession};
use nav_core::systems::bounds::CaveBounds;
use nav_core::systems::interaction::{EventBuf, InteractionTuning};
use nav_core::systems::look::LookTuning;
use nav_core::systems::movement::MoveTuning;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowAttributes, WindowId},
};
use world_core::components::{ActivatePolicy, InteractableTarget, InteractionEvent, PlayerPose, TargetId};

/// Consumer of per-frame pose snapshots (the renderer boundary).
pub trait PoseSink {
    fn publish(&mut self, pose: &PlayerPose);
}

/// Default sink: trace-level pose logging.
#[derive(Default)]
pub struct LogPoseSink;

impl PoseSink for LogPoseSink {
    fn publish(&mut self, pose: &PlayerPose) {
        log::trace!(
            target: "nav",
            "eye=({:.2},{:.2},{:.2}) yaw={:.3} pitch={:.3}",
            pose.eye.x,
            pose.eye.y,
            pose.eye.z,
            pose.yaw,
            pose.pitch
        );
    }
}

/// Map a physical key to a movement axis.
#[must_use]
pub fn axis_for_key(code: KeyCode) -> Option<MoveAxis> {
    match code {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(MoveAxis::Forward),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(MoveAxis::Backward),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(MoveAxis::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(MoveAxis::Right),
        KeyCode::Space => Some(MoveAxis::Up),
        KeyCode::ShiftLeft => Some(MoveAxis::Down),
        _ => None,
    }
}

fn parse_policy(s: &str) -> ActivatePolicy {
    match s {
        "while_in_range" => ActivatePolicy::WhileInRange,
        "on_enter" => ActivatePolicy::OnEnter,
        other => {
            log::warn!(target: "nav", "unknown activate_policy {other:?}; using on_enter");
            ActivatePolicy::OnEnter
        }
    }
}

fn look_tuning(cfg: &data_runtime::configs::nav_camera::NavCameraCfg) -> LookTuning {
    let d = LookTuning::default();
    let yaw_limits = match (cfg.min_yaw_deg, cfg.max_yaw_deg) {
        (Some(lo), Some(hi)) => Some((lo.to_radians(), hi.to_radians())),
        _ => None,
    };
    LookTuning {
        sensitivity_deg_per_count: cfg
            .sensitivity_deg_per_count
            .unwrap_or(d.sensitivity_deg_per_count),
        invert_y: cfg.invert_y.unwrap_or(d.invert_y),
        min_pitch: cfg.min_pitch_deg.map_or(d.min_pitch, f32::to_radians),
        max_pitch: cfg.max_pitch_deg.map_or(d.max_pitch, f32::to_radians),
        yaw_limits,
        max_step: cfg.max_step_deg.map_or(d.max_step, f32::to_radians),
        smoothing_rate: cfg.smoothing_rate.unwrap_or(d.smoothing_rate),
    }
}

/// Resolve the full session config from data/config files plus env.
pub fn session_config() -> Result<NavConfig> {
    let cam = data_runtime::configs::nav_camera::load_default()?;
    let cave = data_runtime::configs::cave::load_default()?;
    let db = CaveBounds::default();
    let dm = MoveTuning::default();
    let di = InteractionTuning::default();
    let spawn = cave
        .spawn
        .map_or(Vec3::new(0.0, 2.0, 0.0), Vec3::from_array);
    Ok(NavConfig {
        look: look_tuning(&cam),
        movement: MoveTuning {
            move_speed: cave.move_speed.unwrap_or(dm.move_speed),
            damping: cave.damping.unwrap_or(dm.damping),
        },
        bounds: CaveBounds {
            half_extent_x: cave.half_extent_x.unwrap_or(db.half_extent_x),
            half_extent_z: cave.half_extent_z.unwrap_or(db.half_extent_z),
            floor_y: cave.floor_y.unwrap_or(db.floor_y),
            ceiling_y: cave.ceiling_y.unwrap_or(db.ceiling_y),
        },
        interaction: InteractionTuning {
            radius: cave.interact_radius.unwrap_or(di.radius),
            policy: cave.activate_policy.as_deref().map_or(di.policy, parse_policy),
        },
        spawn,
    })
}

/// A few undiscovered targets scattered through the cave (demo world).
#[must_use]
pub fn demo_targets() -> Vec<InteractableTarget> {
    [
        Vec3::new(12.0, 2.0, -8.0),
        Vec3::new(-20.0, 6.0, 15.0),
        Vec3::new(35.0, 10.0, 30.0),
        Vec3::new(-5.0, 3.0, -40.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, position)| InteractableTarget {
        id: TargetId(i as u64 + 1),
        position,
        discovered: false,
    })
    .collect()
}

struct App {
    window: Option<Window>,
    session: NavSession,
    world: Vec<InteractableTarget>,
    sink: Box<dyn PoseSink>,
    last_time: Option<std::time::Instant>,
    pointer_locked: bool,
    events: EventBuf,
}

impl App {
    fn set_pointer_lock(&mut self, lock: bool) {
        let Some(window) = &self.window else { return };
        let grab_mode = if lock {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::None
        };
        match window.set_cursor_grab(grab_mode) {
            Ok(()) => {
                window.set_cursor_visible(!lock);
                self.pointer_locked = lock;
                self.session.on_capture_changed(lock);
            }
            Err(e) => {
                // Locking can be denied by the platform; stay in cursor mode.
                log::debug!("pointer lock request failed: {e:?}");
                window.set_cursor_visible(true);
                self.pointer_locked = false;
                self.session.on_capture_changed(false);
            }
        }
    }

    fn tick_frame(&mut self) {
        let now = std::time::Instant::now();
        let dt = if let Some(t0) = self.last_time.take() {
            (now - t0).as_secs_f32().clamp(0.0, 0.1)
        } else {
            1.0 / 60.0
        };
        self.last_time = Some(now);

        self.events.clear();
        let pose = self.session.tick(dt, &self.world, &mut self.events);
        for ev in &self.events {
            match ev {
                InteractionEvent::Discover(id) => {
                    if let Some(t) = self.world.iter_mut().find(|t| t.id == *id) {
                        t.discovered = true;
                    }
                    log::info!(target: "world", "discovered target {}", id.0);
                }
                InteractionEvent::Activate(id) => {
                    log::info!(target: "world", "activate target {}", id.0);
                }
            }
        }
        self.sink.publish(&pose);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title("Cavern of Songs")
                        .with_maximized(true),
                )
                .expect("create window");
            self.window = Some(window);
            self.last_time = Some(std::time::Instant::now());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else { return };
        if window.id() != window_id {
            return;
        }
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                let pressed = event.state == ElementState::Pressed;
                if let PhysicalKey::Code(code) = event.physical_key {
                    if let Some(axis) = axis_for_key(code) {
                        self.session.on_movement_key(axis, pressed);
                    } else if pressed && code == KeyCode::KeyR {
                        self.session.on_reset_requested();
                    } else if pressed && code == KeyCode::Escape {
                        self.set_pointer_lock(false);
                    }
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if !self.pointer_locked {
                    self.set_pointer_lock(true);
                }
            }
            WindowEvent::RedrawRequested => self.tick_frame(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            if self.pointer_locked {
                #[allow(clippy::cast_possible_truncation)]
                self.session.on_pointer_delta(dx as f32, dy as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run with config resolved from data/config + env, the demo world, and the
/// logging pose sink.
pub fn run() -> Result<()> {
    run_with(session_config()?, demo_targets(), Box::new(LogPoseSink))
}

/// Run the session loop against a caller-supplied world and pose sink.
pub fn run_with(
    config: NavConfig,
    world: Vec<InteractableTarget>,
    sink: Box<dyn PoseSink>,
) -> Result<()> {
    let session = NavSession::new(config)?;
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App {
        window: None,
        session,
        world,
        sink,
        last_time: None,
        pointer_locked: false,
        events: EventBuf::new(),
    };
    event_loop.run_app(&mut app)?;
    Ok(())
}
