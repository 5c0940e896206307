//! App - audio device setup and the fixed-step main loop

use std::{
    io::stdout,
    thread,
    time::{Duration, Instant},
};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    BufferSize, Device, Stream, StreamConfig,
};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
};
use ratatui::DefaultTerminal;
use tracing::{error, info, warn};

use boing::{
    audio::{channel, MixerHandle, SampleBuffer, DEFAULT_QUEUE_CAPACITY},
    tuning::Tuning,
    CHANNELS, DEFAULT_VOICE_CAPACITY, FRAMES_PER_CALLBACK, SAMPLE_RATE,
};

use super::character::Character;
use super::ui::{self, View};

pub struct App {
    tuning: Tuning,
    jump_sound: SampleBuffer,
}

impl App {
    pub fn new(tuning: Tuning, jump_sound: SampleBuffer) -> Self {
        Self { tuning, jump_sound }
    }

    /// Open the audio device, take over the terminal and run until quit.
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;

        let (stream, mut mixer) = open_stream(&device)?;
        mixer.set_master_volume(self.tuning.master_volume);
        stream.play().wrap_err("failed to start output stream")?;

        let mut character =
            Character::new(&self.tuning).wrap_err("invalid animation tuning")?;

        let mut terminal = ratatui::init();
        let release_events = enable_release_events();
        info!(release_events, "terminal ready");

        let res = self.main_loop(&mut terminal, &mut character, &mut mixer, release_events);

        if release_events {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
        res
    }

    fn main_loop(
        &self,
        terminal: &mut DefaultTerminal,
        character: &mut Character,
        mixer: &mut MixerHandle,
        release_events: bool,
    ) -> EyreResult<()> {
        let dt = self.tuning.timestep;
        let frame_time = Duration::from_secs_f32(dt);
        let mut jumps = 0u32;

        loop {
            let frame_start = Instant::now();

            let mut jump = false;
            while event::poll(Duration::ZERO)? {
                let Event::Key(key) = event::read()? else {
                    continue;
                };
                match (key.code, key.kind) {
                    (KeyCode::Char('q') | KeyCode::Esc, KeyEventKind::Press) => return Ok(()),
                    (KeyCode::Char(' '), KeyEventKind::Press) => character.crouch(),
                    (KeyCode::Char(' '), KeyEventKind::Release) => jump |= character.release(),
                    _ => {}
                }
            }

            // Without release events the jump fires once the crouch bottoms out.
            if !release_events && character.crouch_complete() {
                jump |= character.release();
            }

            if jump {
                mixer.trigger(&self.jump_sound);
                jumps += 1;
            }

            let view = View {
                pose: character.step(dt),
                ground: character.ground(),
                arena: self.tuning.arena,
                stance: character.stance(),
                airborne: character.airborne(),
                jumps,
                release_events,
            };
            terminal.draw(|frame| ui::render(frame, &view))?;

            if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
}

/// Open a 16-bit mono 48 kHz output stream driven by a fresh mixer, asking
/// for fixed-size callbacks first and the device's own size otherwise.
fn open_stream(device: &Device) -> EyreResult<(Stream, MixerHandle)> {
    match build_stream(device, BufferSize::Fixed(FRAMES_PER_CALLBACK as u32)) {
        Ok(opened) => Ok(opened),
        Err(err) => {
            warn!(%err, "fixed {FRAMES_PER_CALLBACK}-frame buffer rejected, using device default");
            build_stream(device, BufferSize::Default).wrap_err("failed to build output stream")
        }
    }
}

fn build_stream(
    device: &Device,
    buffer_size: BufferSize,
) -> Result<(Stream, MixerHandle), cpal::BuildStreamError> {
    let config = StreamConfig {
        channels: CHANNELS,
        sample_rate: cpal::SampleRate(SAMPLE_RATE),
        buffer_size,
    };
    let (handle, mut mixer) = channel::<DEFAULT_VOICE_CAPACITY>(DEFAULT_QUEUE_CAPACITY);

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [i16], _| mixer.mix(data),
        |err| error!(%err, "audio stream error"),
        None,
    )?;

    info!(?config, "audio stream opened");
    Ok((stream, handle))
}

/// Ask the terminal to report key releases. Returns whether it will.
fn enable_release_events() -> bool {
    let supported = crossterm::terminal::supports_keyboard_enhancement().unwrap_or(false);
    supported
        && execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok()
}
