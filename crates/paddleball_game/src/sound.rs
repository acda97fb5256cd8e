use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use log::{error, warn};
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::session::Cue;

/// Pitch and length of the synthesized tone for each cue. No sound assets
/// are shipped; everything on the speaker is a short sine beep.
fn tone_for_cue(cue: Cue) -> (f32, Duration) {
    match cue {
        Cue::WallBounce => (220.0, Duration::from_millis(40)),
        Cue::PaddleHit => (440.0, Duration::from_millis(50)),
        Cue::Goal => (110.0, Duration::from_millis(400)),
        Cue::MenuMove => (660.0, Duration::from_millis(25)),
        Cue::MenuSelect => (880.0, Duration::from_millis(60)),
    }
}

struct SoundThread {
    receiver: Receiver<Cue>,
}

impl SoundThread {
    fn run(self) {
        // Keep the stream alive as long as the audio thread runs.
        let Ok((stream, stream_handle)) = OutputStream::try_default() else {
            error!("Failed to open default audio output stream, disabling audio");
            return;
        };
        let _stream = stream;

        let Ok(sink) = Sink::try_new(&stream_handle) else {
            error!("Failed to create audio sink, disabling audio");
            return;
        };

        loop {
            match self.receiver.recv() {
                Ok(cue) => {
                    let (frequency, length) = tone_for_cue(cue);
                    let source = SineWave::new(frequency).take_duration(length).amplify(0.20);
                    sink.append(source);
                    // Block until the current tone finishes; cues queued in
                    // the meantime play back to back.
                    sink.sleep_until_end();
                }
                Err(e) => {
                    warn!("Audio channel closed: {e}");
                    break;
                }
            }
        }
    }
}

/// Fire-and-forget cue player living on the game thread.
///
/// Cues are handed to a dedicated audio thread over a channel. If audio
/// cannot be brought up the manager is simply absent and the game runs
/// silently.
pub struct SoundManager {
    sender: Sender<Cue>,
}

impl SoundManager {
    pub fn new() -> Option<Self> {
        let (sender, receiver) = mpsc::channel::<Cue>();
        let sound_thread = SoundThread { receiver };

        if let Err(e) = thread::Builder::new()
            .name("paddleball_sound".into())
            .spawn(move || sound_thread.run())
        {
            error!("Failed to spawn audio thread: {e}");
            return None;
        }

        Some(Self { sender })
    }

    pub fn play(&self, cue: Cue) {
        // Ignore send errors; if the audio thread has gone away we simply
        // stop playing new sounds.
        let _ = self.sender.send(cue);
    }
}
