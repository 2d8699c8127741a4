// Recording backend shared by the unit tests

use std::cell::RefCell;
use std::rc::Rc;

use super::controller::{MotorBackend, Port};
use super::info::Speed;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Call {
    Begin(Port),
    Set(Speed),
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    raw: Speed,
    fault: Option<String>,
}

/// Backend that logs every attempted call; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    state: Rc<RefCell<State>>,
}

impl Recorder {
    pub fn with_raw(raw: Speed) -> Self {
        let rec = Self::default();
        rec.state.borrow_mut().raw = raw;
        rec
    }

    /// Every call is still logged, then fails with `msg`
    pub fn failing(msg: &str) -> Self {
        let rec = Self::default();
        rec.state.borrow_mut().fault = Some(msg.to_string());
        rec
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    fn check(&self) -> Result<(), String> {
        match &self.state.borrow().fault {
            Some(msg) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

impl MotorBackend for Recorder {
    type Error = String;

    fn begin(&mut self, port: Port) -> Result<(), String> {
        self.state.borrow_mut().calls.push(Call::Begin(port));
        self.check()
    }

    fn set_speed_raw(&mut self, raw: Speed) -> Result<(), String> {
        self.state.borrow_mut().calls.push(Call::Set(raw));
        self.check()?;
        self.state.borrow_mut().raw = raw;
        Ok(())
    }

    fn speed_raw(&self) -> Result<Speed, String> {
        self.check()?;
        Ok(self.state.borrow().raw)
    }
}
