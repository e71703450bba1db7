use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::thread;

use player::{
    Command, Event, MediaElement, MediaEvent, Player, PlayerErrorEvent, Renderer,
};

const INPUT_CHANNEL_CAPACITY: usize = 32;
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Input accepted by the player worker: a user command or a hardware
/// notification, processed in arrival order on one thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerInput {
    Command(Command),
    Media(MediaEvent),
}

/// Sender used by the shell to dispatch input to the player worker.
pub type PlayerInputSender = SyncSender<PlayerInput>;

/// Receiver used by the shell to read events emitted by the player worker.
pub type PlayerEventReceiver = Receiver<Event>;

/// Spawns the worker owning the player and returns its channel endpoints.
///
/// Command failures are not fatal to the worker: they come back as
/// [`Event::Error`] on the event channel.
pub fn spawn_player_bridge<M, R>(
    mut player: Player<M, R>,
) -> (PlayerInputSender, PlayerEventReceiver)
where
    M: MediaElement + Send + 'static,
    R: Renderer + Send + 'static,
{
    let (input_tx, input_rx) = mpsc::sync_channel::<PlayerInput>(INPUT_CHANNEL_CAPACITY);
    let (event_tx, event_rx) = mpsc::sync_channel::<Event>(EVENT_CHANNEL_CAPACITY);

    thread::spawn(move || {
        while let Ok(input) = input_rx.recv() {
            let result = match input {
                PlayerInput::Command(command) => player.handle_command(command),
                PlayerInput::Media(event) => player.handle_media_event(event),
            };
            match result {
                Ok(events) => {
                    for event in events {
                        if event_tx.send(event).is_err() {
                            return;
                        }
                    }
                }
                Err(error) => {
                    if event_tx
                        .send(Event::Error(PlayerErrorEvent::from_error(&error)))
                        .is_err()
                    {
                        return;
                    }
                }
            }
        }
    });

    (input_tx, event_rx)
}

/// Channel-backed bridge between shell state and the player worker.
#[derive(Debug)]
pub struct PlayerBridge {
    input_tx: PlayerInputSender,
    event_rx: PlayerEventReceiver,
}

impl PlayerBridge {
    pub fn new(input_tx: PlayerInputSender, event_rx: PlayerEventReceiver) -> Self {
        Self { input_tx, event_rx }
    }

    /// Sends one command to the player worker.
    pub fn send_command(&self, command: Command) -> Result<(), BridgeError> {
        self.input_tx
            .send(PlayerInput::Command(command))
            .map_err(|_| BridgeError::Disconnected)
    }

    /// Forwards one hardware media event to the player worker.
    pub fn send_media_event(&self, event: MediaEvent) -> Result<(), BridgeError> {
        self.input_tx
            .send(PlayerInput::Media(event))
            .map_err(|_| BridgeError::Disconnected)
    }

    /// Receives all currently queued events without blocking.
    pub fn drain_events(&self) -> Result<Vec<Event>, BridgeError> {
        let mut events = Vec::new();
        loop {
            match self.event_rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => return Ok(events),
                Err(TryRecvError::Disconnected) => return Err(BridgeError::Disconnected),
            }
        }
    }
}

/// Error raised by the shell-player bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    Disconnected,
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use player::{
        Command, Event, MediaElement, MediaEvent, PlaybackIntent, Player, PlayerErrorKind,
        PlayerOptions, Renderer, RendererConfig, SwipeMode,
    };

    use super::{PlayerBridge, spawn_player_bridge};

    /// Minimal in-process media element for bridge tests.
    #[derive(Debug)]
    struct NullMedia {
        current_time: f64,
        duration: f64,
        volume: f64,
        muted: bool,
    }

    impl NullMedia {
        fn new() -> Self {
            Self {
                current_time: 0.0,
                duration: 100.0,
                volume: 1.0,
                muted: false,
            }
        }
    }

    impl MediaElement for NullMedia {
        fn play(&mut self) {}
        fn pause(&mut self) {}
        fn load(&mut self) {}

        fn current_time(&self) -> f64 {
            self.current_time
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.current_time = seconds;
        }

        fn duration(&self) -> Option<f64> {
            Some(self.duration)
        }

        fn volume(&self) -> f64 {
            self.volume
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }

        fn muted(&self) -> bool {
            self.muted
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn set_looping(&mut self, _looping: bool) {}
        fn set_autoplay(&mut self, _autoplay: bool) {}

        fn buffered_end(&self) -> Option<f64> {
            None
        }
    }

    #[derive(Debug)]
    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn start(&mut self) {}
        fn pause(&mut self) {}
        fn stop(&mut self) {}
        fn load_video(&mut self) {}
        fn configure(&mut self, _config: RendererConfig) {}

        fn device_motion_available(&self) -> bool {
            false
        }
    }

    fn spawn_test_worker() -> (super::PlayerInputSender, super::PlayerEventReceiver) {
        let player = Player::new(NullMedia::new(), NullRenderer, PlayerOptions::default());
        spawn_player_bridge(player)
    }

    #[test]
    fn bridge_forwards_player_events_for_commands() {
        let (input_tx, event_rx) = spawn_test_worker();

        input_tx
            .send(super::PlayerInput::Command(Command::Play))
            .expect("send play command");

        let event = event_rx
            .recv_timeout(Duration::from_secs(1))
            .expect("intent event");
        assert_eq!(event, Event::IntentChanged(PlaybackIntent::Playing));
    }

    #[test]
    fn bridge_maps_command_failures_to_error_events() {
        let (input_tx, event_rx) = spawn_test_worker();

        input_tx
            .send(super::PlayerInput::Command(Command::SetSwipeMode {
                mode: SwipeMode::DeviceMotion,
            }))
            .expect("send swipe mode command");

        let event = event_rx
            .recv_timeout(Duration::from_secs(1))
            .expect("error event");
        let Event::Error(error) = event else {
            panic!("expected Event::Error");
        };
        assert_eq!(error.kind, PlayerErrorKind::DeviceMotionUnavailable);
        assert!(error.message.contains("device motion"));
    }

    #[test]
    fn bridge_forwards_hardware_events_through_the_same_worker() {
        let (input_tx, event_rx) = spawn_test_worker();

        input_tx
            .send(super::PlayerInput::Media(MediaEvent::VolumeChanged))
            .expect("send volume event");

        let event = event_rx
            .recv_timeout(Duration::from_secs(1))
            .expect("volume event");
        assert!(matches!(event, Event::VolumeLevelChanged(_)));
    }

    #[test]
    fn drain_reads_queued_events_without_blocking() {
        let (input_tx, event_rx) = spawn_test_worker();
        let bridge = PlayerBridge::new(input_tx, event_rx);

        bridge
            .send_command(Command::Play)
            .expect("command should be sent");
        bridge
            .send_media_event(MediaEvent::VolumeChanged)
            .expect("media event should be sent");

        let mut events = Vec::new();
        while events.len() < 2 {
            std::thread::sleep(Duration::from_millis(5));
            events.extend(bridge.drain_events().expect("events should be drained"));
        }
        assert_eq!(events[0], Event::IntentChanged(PlaybackIntent::Playing));
        assert!(matches!(events[1], Event::VolumeLevelChanged(_)));
    }
}
