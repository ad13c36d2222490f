use pomodial::{AlarmSound, AudioManager};
use tempfile::TempDir;

#[tokio::test]
async fn test_alarm_loop_workflow() {
    let manager = AudioManager::new_dummy();

    // 1. Nothing playing initially
    assert!(!manager.is_alarm_playing());
    assert!(!manager.stop_alarm());

    // 2. Start, switch sound mid-alarm, stop
    manager.start_alarm(AlarmSound::ClassicAlarm).unwrap();
    assert_eq!(manager.current_alarm(), Some(AlarmSound::ClassicAlarm));

    manager.start_alarm(AlarmSound::VintageWarning).unwrap();
    assert_eq!(manager.current_alarm(), Some(AlarmSound::VintageWarning));

    assert!(manager.stop_alarm());
    assert_eq!(manager.current_alarm(), None);

    // 3. A restart after stopping works again
    manager.start_alarm(AlarmSound::ClassicAlarm).unwrap();
    assert!(manager.is_alarm_playing());
    manager.stop_alarm();
}

#[tokio::test]
async fn test_every_sound_has_an_asset() {
    let temp_dir = TempDir::new().unwrap();
    let manager = AudioManager::new(temp_dir.path().to_path_buf()).unwrap();

    for sound in AlarmSound::ALL {
        let path = manager.sound_path(sound);
        assert!(path.starts_with(temp_dir.path()));
        assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("wav"));
    }
}

#[tokio::test]
async fn test_preview_does_not_touch_alarm_state() {
    let manager = AudioManager::new_dummy();

    manager.preview(AlarmSound::SoundAlert).unwrap();
    assert!(!manager.is_alarm_playing());
}

#[tokio::test]
async fn test_playback_volume() {
    let temp_dir = TempDir::new().unwrap();
    let manager = AudioManager::new(temp_dir.path().to_path_buf()).unwrap();
    assert_eq!(manager.get_volume(), 0.7);
    assert_eq!(AudioManager::new_dummy().get_volume(), 0.0);
}
