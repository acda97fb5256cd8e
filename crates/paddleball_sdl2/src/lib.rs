use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

use paddleball_common::key::Key;

pub use paddleball_common;
pub use paddleball_common::app::App;
pub use sdl2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

pub struct SdlContext;

impl SdlContext {
    /// Bring up the SDL window and drive the app until it asks to exit or
    /// the window is closed.
    ///
    /// The app draws into an RGB24 buffer which is uploaded to a streaming
    /// texture each frame. The duration of the previous frame is measured
    /// with a monotonic clock and handed to `App::update`, so game physics
    /// scales with frame duration rather than frame count.
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;

        let creator = canvas.texture_creator();
        let mut texture =
            creator.create_texture_streaming(map_pixel_format(pixel_format), width, height)?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];

        app.init();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        // Fallback pacing for drivers that ignore the vsync request; without
        // it the measured frame time can round down to zero milliseconds.
        let target_frame = Duration::from_micros(16_667);
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            let elapsed = now.duration_since(last_frame);
            last_frame = now;

            app.update(elapsed.as_millis() as u32, &mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let frame_time = Instant::now().duration_since(now);
            if frame_time < target_frame {
                std::thread::sleep(target_frame - frame_time);
            }
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: sdl2::keyboard::Keycode) -> Key {
    match keycode {
        sdl2::keyboard::Keycode::A => Key::A,
        sdl2::keyboard::Keycode::D => Key::D,
        sdl2::keyboard::Keycode::W => Key::W,
        sdl2::keyboard::Keycode::S => Key::S,
        sdl2::keyboard::Keycode::P => Key::P,
        sdl2::keyboard::Keycode::Up => Key::Up,
        sdl2::keyboard::Keycode::Down => Key::Down,
        sdl2::keyboard::Keycode::Left => Key::Left,
        sdl2::keyboard::Keycode::Right => Key::Right,
        sdl2::keyboard::Keycode::Space => Key::Space,
        sdl2::keyboard::Keycode::Return => Key::Return,
        sdl2::keyboard::Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
