use softbuffer::{Context, Surface};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use std::{
    num::NonZeroU32,
    sync::{
        mpsc::{self, SyncSender, TryRecvError},
        Arc,
    },
    thread,
};

use log::{error, warn};

use crate::data::{Command, Program, TITLE};
use crate::error::AppError;

type WindowSurface = Surface<Arc<Window>, Arc<Window>>;

struct WindowState {
    pub prog: Program,
    pub window: Option<Arc<Window>>,
    pub surface: Option<WindowSurface>,
    pub exit_sender: Option<SyncSender<()>>,
    pub final_buffer_size: PhysicalSize<u32>,
    pub init_error: Option<AppError>,
}

/// Maps a key press to a program command.
fn key_command(key: Key<&str>) -> Option<Command> {
    match key {
        Key::Named(NamedKey::Escape) => Some(Command::Close),

        Key::Named(NamedKey::Space) | Key::Character("n") | Key::Character("N") => {
            Some(Command::SpawnBall)
        }

        _ => None,
    }
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only the first resume creates the window.
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_window(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                let Some(surface) = self.surface.as_mut() else {
                    return;
                };

                self.final_buffer_size = PhysicalSize::new(width, height);

                if let Err(e) = Self::resize_surface(surface, width, height) {
                    warn!("Unable to resize the frame buffer: {e}");
                    return;
                }

                if let Ok(mut buffer) = surface.buffer_mut() {
                    buffer.fill(0x0);
                }
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match key_command(event.logical_key.as_ref()) {
                    Some(cmd) if cmd.is_close_requested() => event_loop.exit(),
                    Some(cmd) => self.prog.eval_command(&cmd),
                    None => {}
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(window) = self.window.as_ref() else {
                    return;
                };

                self.prog.update();
                self.prog.render();

                let Some(surface) = self.surface.as_mut() else {
                    return;
                };

                match surface.buffer_mut() {
                    Ok(mut buffer) => {
                        self.prog.pix.scale_to(
                            self.prog.scale() as usize,
                            &mut buffer,
                            Some(self.final_buffer_size.width as usize),
                        );

                        window.pre_present_notify();
                        if let Err(e) = buffer.present() {
                            warn!("Failing to present buffers to the window: {e}");
                        }
                    }

                    Err(e) => warn!("Unable to get the frame buffer: {e}"),
                }
            }

            _ => {}
        }
    }
}

impl WindowState {
    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        self.prog.print_startup_info();

        let scale = self.prog.scale() as u32;
        let win_size = PhysicalSize::<u32>::new(
            self.prog.pix.width() as u32 * scale,
            self.prog.pix.height() as u32 * scale,
        );

        let window_attributes = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(win_size)
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let size = window.inner_size();
        self.final_buffer_size = size;

        let context = Context::new(window.clone())?;
        let mut surface = Surface::new(&context, window.clone())?;
        Self::resize_surface(&mut surface, size.width, size.height)?;
        self.surface = Some(surface);

        // Some window managers ignore the resizable hint.
        window.set_min_inner_size(Some(win_size));
        window.set_max_inner_size(Some(win_size));

        let (exit_send, exit_recv) = mpsc::sync_channel(1);
        self.exit_sender = Some(exit_send);

        let fps = self.prog.fps();
        let ticker = window.clone();

        // Thread to control requesting redraws.
        thread::Builder::new()
            .name("tick".into())
            .spawn(move || {
                let mut clock = fps_clock::FpsClock::new(fps);

                loop {
                    clock.tick();

                    match exit_recv.try_recv() {
                        Ok(()) | Err(TryRecvError::Disconnected) => break,
                        Err(TryRecvError::Empty) => {}
                    }

                    if !ticker.is_minimized().unwrap_or(false) {
                        ticker.request_redraw();
                    }
                }
            })?;

        self.prog.reset_clock();
        self.window = Some(window);

        Ok(())
    }

    fn resize_surface(surface: &mut WindowSurface, w: u32, h: u32) -> Result<(), AppError> {
        let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
            return Err(AppError::ZeroSize(w, h));
        };

        surface.resize(nw, nh)?;
        Ok(())
    }
}

pub fn winit_main(prog: Program) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;

    let mut state = WindowState {
        prog,
        window: None,
        surface: None,
        exit_sender: None,
        final_buffer_size: PhysicalSize::<u32>::new(0, 0),
        init_error: None,
    };

    event_loop.set_control_flow(ControlFlow::Wait);
    let run = event_loop.run_app(&mut state);

    if let Some(sender) = state.exit_sender.take() {
        let _ = sender.try_send(());
    }

    if let Some(e) = state.init_error.take() {
        error!("Initialization failed, exiting.");
        return Err(e);
    }

    run.map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_keys() {
        for key in [
            Key::Character("n"),
            Key::Character("N"),
            Key::Named(NamedKey::Space),
        ] {
            assert_eq!(key_command(key), Some(Command::SpawnBall));
        }
    }

    #[test]
    fn escape_closes() {
        let cmd = key_command(Key::Named(NamedKey::Escape));
        assert!(cmd.is_some_and(|c| c.is_close_requested()));
    }

    #[test]
    fn other_keys_do_nothing() {
        assert_eq!(key_command(Key::Character("m")), None);
        assert_eq!(key_command(Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn spawn_key_grows_world_by_one() {
        let mut prog = Program::new();
        prog.reseed(11);
        prog.populate();
        let before = prog.world().len();

        if let Some(cmd) = key_command(Key::Character("n")) {
            prog.eval_command(&cmd);
        }

        assert_eq!(prog.world().len(), before + 1);
        let ball = prog.world().balls()[before];
        assert!(ball.radius >= 10.0 && ball.radius < 50.0);
    }
}
