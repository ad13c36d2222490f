use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use rodio::{Decoder, OutputStream, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::models::AlarmSound;

/// Plays the selected alarm on a loop until told to stop.
///
/// At most one alarm loop is alive at a time. Stopping drops the sink, so the
/// next start plays the asset from the beginning again.
#[derive(Clone)]
pub struct AudioManager {
    volume: f32,
    sounds_dir: PathBuf,
    enabled: bool,
    alarm: Arc<Mutex<Option<AlarmLoop>>>,
}

struct AlarmLoop {
    sound: AlarmSound,
    token: CancellationToken,
}

impl Drop for AlarmLoop {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl AudioManager {
    pub fn new(sounds_dir: PathBuf) -> Result<Self> {
        info!("Initializing audio system with sounds from {:?}", sounds_dir);

        if sounds_dir.exists() && !sounds_dir.is_dir() {
            return Err(anyhow!("Sounds path is not a directory: {:?}", sounds_dir));
        }
        if !sounds_dir.exists() {
            warn!("Sounds directory {:?} does not exist, alarms will use a synthesized tone", sounds_dir);
        }

        Ok(AudioManager {
            volume: 0.7, // Default volume 70%
            sounds_dir,
            enabled: true,
            alarm: Arc::new(Mutex::new(None)),
        })
    }

    /// Create a dummy audio manager that tracks alarm state but never plays
    /// Used when audio system initialization fails
    pub fn new_dummy() -> Self {
        warn!("Using dummy audio manager - audio features will be disabled");

        AudioManager {
            volume: 0.0,
            sounds_dir: PathBuf::new(),
            enabled: false,
            alarm: Arc::new(Mutex::new(None)),
        }
    }

    pub fn get_volume(&self) -> f32 {
        self.volume
    }

    pub fn sound_path(&self, sound: AlarmSound) -> PathBuf {
        self.sounds_dir.join(sound.asset_file())
    }

    /// Starts looping `sound`. A loop that is already playing is stopped
    /// first, so switching sounds mid-alarm restarts with the new one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_alarm(&self, sound: AlarmSound) -> Result<()> {
        let runtime = Handle::try_current().context("Alarm playback needs a tokio runtime")?;

        let token = CancellationToken::new();
        let previous = lock(&self.alarm).replace(AlarmLoop {
            sound,
            token: token.clone(),
        });
        drop(previous);

        info!("Starting alarm loop: {}", sound.label());
        if !self.enabled {
            return Ok(());
        }

        let path = self.sound_path(sound);
        let volume = self.get_volume();
        let loop_runtime = runtime.clone();
        runtime.spawn_blocking(move || {
            if let Err(e) = Self::play_looping(&path, volume, &token, &loop_runtime) {
                error!("Failed to play alarm {:?}: {}", path, e);
            }
        });

        Ok(())
    }

    /// Stops the alarm loop. Returns whether one was playing.
    pub fn stop_alarm(&self) -> bool {
        match lock(&self.alarm).take() {
            Some(alarm) => {
                info!("Stopping alarm loop: {}", alarm.sound.label());
                true
            }
            None => false,
        }
    }

    pub fn is_alarm_playing(&self) -> bool {
        lock(&self.alarm).is_some()
    }

    pub fn current_alarm(&self) -> Option<AlarmSound> {
        lock(&self.alarm).as_ref().map(|alarm| alarm.sound)
    }

    /// Plays `sound` once, for trying sounds out in the settings editor.
    pub fn preview(&self, sound: AlarmSound) -> Result<()> {
        info!("Previewing alarm sound: {}", sound.label());
        if !self.enabled {
            return Ok(());
        }

        let runtime = Handle::try_current().context("Alarm preview needs a tokio runtime")?;
        let path = self.sound_path(sound);
        let volume = self.get_volume();
        runtime.spawn_blocking(move || {
            if let Err(e) = Self::play_once(&path, volume) {
                error!("Failed to preview sound {:?}: {}", path, e);
            }
        });

        Ok(())
    }

    fn play_looping(path: &Path, volume: f32, token: &CancellationToken, runtime: &Handle) -> Result<()> {
        // OutputStream is not Send, so it lives on this worker thread
        let (_stream, stream_handle) = OutputStream::try_default()
            .context("Failed to create audio output stream")?;
        let sink = Sink::try_new(&stream_handle).context("Failed to create audio sink")?;

        if path.exists() {
            debug!("Looping sound file: {:?}", path);
            let file = File::open(path).context("Failed to open sound file")?;
            let source = Decoder::new(BufReader::new(file))?
                .convert_samples::<f32>()
                .amplify(volume)
                .repeat_infinite();
            sink.append(source);
        } else {
            warn!("Sound file does not exist: {:?}, using fallback tone", path);
            sink.append(fallback_beep(volume).repeat_infinite());
        }

        runtime.block_on(token.cancelled());
        sink.stop();
        debug!("Alarm loop finished");

        Ok(())
    }

    fn play_once(path: &Path, volume: f32) -> Result<()> {
        let (_stream, stream_handle) = OutputStream::try_default()
            .context("Failed to create audio output stream")?;
        let sink = Sink::try_new(&stream_handle)?;

        if path.exists() {
            let file = File::open(path).context("Failed to open sound file")?;
            let source = Decoder::new(BufReader::new(file))?
                .convert_samples::<f32>()
                .amplify(volume);
            sink.append(source);
        } else {
            warn!("Sound file does not exist: {:?}, using fallback tone", path);
            sink.append(fallback_beep(volume));
        }

        sink.sleep_until_end();
        Ok(())
    }

    pub fn ensure_sound_directory(sounds_dir: &Path) -> Result<PathBuf> {
        if !sounds_dir.exists() {
            std::fs::create_dir_all(sounds_dir).context("Failed to create sounds directory")?;
            info!("Created sounds directory: {:?}", sounds_dir);
        }

        Ok(sounds_dir.to_path_buf())
    }
}

/// Short A5 beep preceded by a pause; repeats into a beeping pattern.
fn fallback_beep(volume: f32) -> impl Source<Item = f32> + Send {
    rodio::source::SineWave::new(880.0)
        .take_duration(Duration::from_millis(300))
        .amplify(volume * 0.3) // Sine tones are harsh at full volume
        .delay(Duration::from_millis(400))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
