use std::time::{Duration, Instant};

use glam::Vec2;
use glutin::dpi::PhysicalSize;
use glutin::event::{ElementState, Event, MouseButton, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest};
use tracing::{debug, error, info};
use winit::event::VirtualKeyCode;
use winit::platform::run_return::EventLoopExtRunReturn;

use crate::backend::{self, GlImmediate};
use crate::draw::{self, Color, Immediate};
use crate::error::{Error, Result};
use crate::gl;
use crate::input::{Cursor, KeyboardHandler};
use crate::projection::{View, Viewport};
use crate::settings::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive drawing program, driven by `run`.
pub trait Exercise {
    fn settings(self: &Self) -> Settings;

    /// Color the frame gets cleared with.
    fn background(self: &Self) -> Color {
        Color::BLACK
    }

    fn key_pressed(self: &mut Self, _key: VirtualKeyCode) -> Flow {
        Flow::Continue
    }

    fn mouse_pressed(self: &mut Self, _button: MouseButton, _cursor: &Cursor) {}

    fn cursor_moved(self: &mut Self, _cursor: &Cursor) {}

    /// Called with a cleared frame and an identity modelview matrix.
    fn draw(self: &mut Self, gfx: &mut dyn Immediate);
}

/// Keeps frames at least `period` apart.
pub struct FramePacer {
    period: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    pub fn new(period: Duration) -> Self {
        FramePacer { period, next: None }
    }

    #[inline]
    pub fn is_due(self: &Self, now: Instant) -> bool {
        self.next.map_or(true, |next| now >= next)
    }

    /// `start` is when drawing of the frame began.
    #[inline]
    pub fn frame_drawn(self: &mut Self, start: Instant) {
        self.next = Some(start + self.period);
    }

    #[inline]
    pub fn next_frame(self: &Self, now: Instant) -> Instant {
        self.next.map_or(now, |next| next.max(now))
    }
}

/// Draws one frame. Split out of `run` so it works without a window.
pub fn render_frame<E: Exercise + ?Sized>(exercise: &mut E, gfx: &mut dyn Immediate) {
    gfx.clear(exercise.background());
    gfx.load_identity();
    exercise.draw(gfx);
}

pub fn run<E: Exercise>(mut exercise: E) -> Result<()> {
    let settings = exercise.settings();
    let res = run_window(&settings, &mut exercise);
    if let Err(e) = &res {
        error!("{}", e);
    }
    res
}

fn run_window<E: Exercise>(settings: &Settings, exercise: &mut E) -> Result<()> {
    let mut events_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(settings.title.as_str())
        .with_inner_size(PhysicalSize::new(settings.width, settings.height));

    let gl_window = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (2, 1)))
        .with_gl_profile(GlProfile::Compatibility)
        .build_windowed(window, &events_loop)?;
    let gl_window = unsafe { gl_window.make_current() }.map_err(|(_, e)| e)?;

    // Load the OpenGL function pointers
    gl::load_with(|s| gl_window.get_proc_address(s) as *const _);
    info!(version = %backend::gl_version(), title = %settings.title, "OpenGL context ready");

    let mut gfx = GlImmediate::new();
    let mut view = View::new(
        Viewport::new(settings.width, settings.height),
        settings.view_size,
    );
    draw::apply_view(&mut gfx, &view);

    let mut keyb = KeyboardHandler::new();
    let mut cursor_pos = Vec2::ZERO;
    let mut pacer = FramePacer::new(settings.frame_period);
    let mut failure: Option<Error> = None;

    let code = events_loop.run_return(|event, _, control_flow| {
        if let ControlFlow::ExitWithCode(_) = *control_flow {
            return;
        }
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    gl_window.resize(size);
                    if view.resize(size.width, size.height) {
                        debug!(width = size.width, height = size.height, "resized");
                        draw::apply_view(&mut gfx, &view);
                    }
                }
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(key) = keyb.handle(&input) {
                        if exercise.key_pressed(key) == Flow::Quit {
                            *control_flow = ControlFlow::Exit;
                        }
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor_pos = Vec2::new(position.x as f32, position.y as f32);
                    exercise.cursor_moved(&Cursor::new(cursor_pos, view));
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button,
                    ..
                } => exercise.mouse_pressed(button, &Cursor::new(cursor_pos, view)),
                _ => {}
            },

            Event::MainEventsCleared => {
                let start = Instant::now();
                if pacer.is_due(start) {
                    render_frame(&mut *exercise, &mut gfx);
                    if let Err(e) = gl_window.swap_buffers() {
                        failure = Some(e.into());
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    pacer.frame_drawn(start);
                }
                *control_flow = ControlFlow::WaitUntil(pacer.next_frame(Instant::now()));
            }

            Event::LoopDestroyed => info!("window closed"),
            _ => {}
        }
    });
    debug!(code, "event loop finished");

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
