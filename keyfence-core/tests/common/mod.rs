use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use keyfence_core::{HookChannel, InterceptorEngine, KeyEvent, Result, VirtualKey};

/// Delivers a key-down for `key` and returns whether it was suppressed.
#[allow(dead_code)]
pub fn press(engine: &InterceptorEngine, key: VirtualKey) -> bool {
    engine.handle_event(&KeyEvent::down(key)).is_suppressed()
}

/// Delivers a key-up for `key` and returns whether it was suppressed.
#[allow(dead_code)]
pub fn release(engine: &InterceptorEngine, key: VirtualKey) -> bool {
    engine.handle_event(&KeyEvent::up(key)).is_suppressed()
}

/// Engine that is hooked and started, ready to suppress.
#[allow(dead_code)]
pub fn started_engine() -> InterceptorEngine {
    let engine = InterceptorEngine::new();
    engine.hook().unwrap();
    engine.start();
    engine
}

/// Hook channel that counts install/uninstall calls.
#[allow(dead_code)]
pub struct CountingChannel {
    pub installs: Arc<AtomicUsize>,
    pub uninstalls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingChannel {
    pub fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let installs = Arc::new(AtomicUsize::new(0));
        let uninstalls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                installs: installs.clone(),
                uninstalls: uninstalls.clone(),
            },
            installs,
            uninstalls,
        )
    }
}

impl HookChannel for CountingChannel {
    fn install(&mut self) -> Result<()> {
        self.installs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn uninstall(&mut self) -> Result<()> {
        self.uninstalls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Hook channel whose install always fails.
#[allow(dead_code)]
pub struct FailingChannel;

impl HookChannel for FailingChannel {
    fn install(&mut self) -> Result<()> {
        Err(keyfence_core::Error::ChannelFailure(
            "install refused".to_string(),
        ))
    }

    fn uninstall(&mut self) -> Result<()> {
        Ok(())
    }
}
