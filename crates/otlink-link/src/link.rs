//! Transaction lifecycle over one biphase line.
//!
//! A [`Link`] owns the line driver and a mutex-guarded [`Session`]. Edges
//! are delivered through [`Link::handle_edge`] or a cloneable
//! [`EdgeHandle`] (suitable for an interrupt shim or a listener thread);
//! everything else — timeouts, frame validation, settle intervals, the
//! response callback — happens in [`Link::poll`], which the owner calls
//! from its main loop.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use otlink_frame::Frame;
use otlink_line::{Level, LineDriver};

use crate::config::LinkConfig;
use crate::error::{LinkError, Result};
use crate::session::{LinkPhase, ResponseOutcome, Role, Session};
use crate::transmitter::send_frame;

/// Interval the blocking send sleeps between polls.
const POLL_YIELD_MICROS: u32 = 500;

/// Callback invoked once per finalized transaction, from poll context.
pub type ResponseHandler = Box<dyn FnMut(Frame, ResponseOutcome) + Send>;

/// One end of a master/slave link.
pub struct Link<L: LineDriver> {
    line: L,
    role: Role,
    config: LinkConfig,
    session: Arc<Mutex<Session>>,
    handler: Option<ResponseHandler>,
}

/// Cloneable handle that feeds level-change events into a link's session.
///
/// Hand a clone to whatever context observes the line — a GPIO interrupt
/// shim, a serial listener thread, a simulation loop. Edges carry their
/// own timestamps so delivery latency does not skew bit classification.
#[derive(Clone)]
pub struct EdgeHandle {
    session: Arc<Mutex<Session>>,
    role: Role,
    config: LinkConfig,
}

impl EdgeHandle {
    /// Process one level change observed at `at_micros`.
    pub fn handle_edge(&self, level: Level, at_micros: u32) {
        lock_session(&self.session).on_edge(level, at_micros, self.role, &self.config);
    }
}

impl<L: LineDriver> Link<L> {
    /// Create a link over `line` playing `role`. The link starts
    /// uninitialized; call [`Link::begin`] before sending.
    pub fn new(line: L, role: Role) -> Self {
        Self {
            line,
            role,
            config: LinkConfig::default(),
            session: Arc::new(Mutex::new(Session::new())),
            handler: None,
        }
    }

    /// Override the timing parameters.
    pub fn with_config(mut self, config: LinkConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the response callback. It fires once per finalized
    /// transaction — success, invalid or timeout — from [`Link::poll`].
    pub fn on_response(
        mut self,
        handler: impl FnMut(Frame, ResponseOutcome) + Send + 'static,
    ) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Initialize the line: drive it idle, hold for the activation
    /// interval so the peer's receiver settles, then become ready.
    pub fn begin(&mut self) {
        self.line.drive_idle();
        self.line.delay_micros(self.config.activation_hold_micros);
        lock_session(&self.session).phase = LinkPhase::Ready;
        tracing::debug!(role = ?self.role, "link ready");
    }

    /// Shut the link down. Edges and sends are refused until the next
    /// [`Link::begin`].
    pub fn end(&mut self) {
        let mut session = lock_session(&self.session);
        session.phase = LinkPhase::Uninitialized;
        session.outcome = ResponseOutcome::None;
    }

    /// Whether a new transaction may start right now.
    pub fn is_ready(&self) -> bool {
        lock_session(&self.session).phase == LinkPhase::Ready
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LinkPhase {
        lock_session(&self.session).phase
    }

    /// The role this end plays.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Outcome of the most recently finalized transaction.
    pub fn last_outcome(&self) -> ResponseOutcome {
        lock_session(&self.session).outcome
    }

    /// The last complete frame received, valid or not. Unchanged by
    /// timeouts, which finish without a full frame.
    pub fn last_response(&self) -> Frame {
        Frame::from_raw(lock_session(&self.session).last_response)
    }

    /// Handle that delivers edges into this link from another context.
    pub fn edge_handle(&self) -> EdgeHandle {
        EdgeHandle {
            session: Arc::clone(&self.session),
            role: self.role,
            config: self.config,
        }
    }

    /// Process one level change observed on the line at `at_micros`.
    pub fn handle_edge(&self, level: Level, at_micros: u32) {
        lock_session(&self.session).on_edge(level, at_micros, self.role, &self.config);
    }

    /// Start a transaction: transmit `request` and arm the receiver.
    ///
    /// Returns as soon as the burst is out; the response arrives through
    /// edges and is finalized by [`Link::poll`]. Rejected (not queued)
    /// unless the link is ready.
    pub fn send_async(&mut self, request: Frame) -> Result<()> {
        {
            let mut session = lock_session(&self.session);
            match session.phase {
                LinkPhase::Uninitialized => return Err(LinkError::NotInitialized),
                LinkPhase::Ready => {}
                phase => return Err(LinkError::NotReady(phase)),
            }
            session.phase = LinkPhase::Sending;
            session.accumulator = 0;
            session.bit_count = 0;
            session.outcome = ResponseOutcome::None;
        }
        tracing::debug!(frame = %request, "sending request");
        send_frame(&mut self.line, request, self.config.half_bit_micros);
        let now = self.line.now_micros();
        let mut session = lock_session(&self.session);
        session.phase = LinkPhase::Waiting;
        session.last_edge_micros = now;
        Ok(())
    }

    /// Send `request` and block until the link is ready again.
    ///
    /// Polls the lifecycle through finalization and the settle interval,
    /// yielding [`POLL_YIELD_MICROS`] through the line driver between
    /// rounds, so the caller may issue the next send immediately on
    /// return.
    pub fn send_blocking(&mut self, request: Frame) -> Result<Frame> {
        self.send_async(request)?;
        loop {
            self.poll();
            if self.is_ready() {
                break;
            }
            self.line.delay_micros(POLL_YIELD_MICROS);
        }
        let session = lock_session(&self.session);
        match session.outcome {
            ResponseOutcome::Success => Ok(Frame::from_raw(session.last_response)),
            ResponseOutcome::Timeout => Err(LinkError::Timeout),
            _ => Err(LinkError::InvalidResponse),
        }
    }

    /// Transmit `reply` to a received request and return to ready.
    ///
    /// The answering side calls this once the settle interval after a
    /// successful request has walked the link back to ready. Rejected
    /// under the same rule as [`Link::send_async`]: a reply must never
    /// clobber an in-flight reception or cut the settle interval short.
    pub fn send_reply(&mut self, reply: Frame) -> Result<()> {
        {
            let mut session = lock_session(&self.session);
            match session.phase {
                LinkPhase::Uninitialized => return Err(LinkError::NotInitialized),
                LinkPhase::Ready => {}
                phase => return Err(LinkError::NotReady(phase)),
            }
            session.phase = LinkPhase::Sending;
        }
        tracing::debug!(frame = %reply, "sending reply");
        send_frame(&mut self.line, reply, self.config.half_bit_micros);
        lock_session(&self.session).phase = LinkPhase::Ready;
        Ok(())
    }

    /// Advance the transaction lifecycle.
    ///
    /// Finalizes pending receive states (validating complete frames for
    /// the role: a master expects response types, a slave request types),
    /// resolves timeouts, walks the settle interval back to ready, and
    /// fires the response callback. Call this from the owner's main loop;
    /// it never blocks.
    pub fn poll(&mut self) {
        let now = self.line.now_micros();
        let fired = {
            let mut session = lock_session(&self.session);
            self.step(&mut session, now)
        };
        if let Some((frame, outcome)) = fired {
            match outcome {
                ResponseOutcome::Success => {
                    tracing::debug!(frame = %frame, "transaction complete")
                }
                _ => tracing::warn!(frame = %frame, outcome = %outcome, "transaction failed"),
            }
            if let Some(handler) = self.handler.as_mut() {
                handler(frame, outcome);
            }
        }
    }

    /// One lifecycle step under the session lock. Returns the finalized
    /// transaction, if this step produced one.
    fn step(&self, session: &mut Session, now: u32) -> Option<(Frame, ResponseOutcome)> {
        let idle_micros = otlink_line::elapsed_micros(now, session.last_edge_micros);
        match session.phase {
            LinkPhase::Uninitialized | LinkPhase::Ready | LinkPhase::Sending => None,
            LinkPhase::Delay => {
                if idle_micros > self.config.settle_micros(self.role) {
                    session.phase = LinkPhase::Ready;
                }
                None
            }
            // Timeout outranks whatever receive state the line is stuck
            // in, including a collected-but-unpolled frame.
            _ if idle_micros > self.config.response_timeout_micros => {
                session.phase = LinkPhase::Ready;
                session.outcome = ResponseOutcome::Timeout;
                Some((Frame::from_raw(session.accumulator), ResponseOutcome::Timeout))
            }
            LinkPhase::Invalid => {
                session.phase = LinkPhase::Delay;
                session.outcome = ResponseOutcome::Invalid;
                Some((Frame::from_raw(session.accumulator), ResponseOutcome::Invalid))
            }
            LinkPhase::FrameReady => {
                let frame = Frame::from_raw(session.accumulator);
                let valid = match self.role {
                    Role::Master => frame.is_valid_response(),
                    Role::Slave => frame.is_valid_request(),
                };
                let outcome = if valid {
                    ResponseOutcome::Success
                } else {
                    ResponseOutcome::Invalid
                };
                session.last_response = session.accumulator;
                session.phase = LinkPhase::Delay;
                session.outcome = outcome;
                Some((frame, outcome))
            }
            // Waiting, StartBitSeen, Receiving: in flight, within the
            // timeout window.
            _ => None,
        }
    }

    /// Borrow the line driver (mainly for simulations and tests).
    pub fn line_mut(&mut self) -> &mut L {
        &mut self.line
    }
}

fn lock_session(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    // The session holds plain integers; a panic mid-update cannot leave
    // it in a state worse than a line glitch, so poisoning is recovered.
    session.lock().unwrap_or_else(PoisonError::into_inner)
}
