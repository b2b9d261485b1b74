//! The shift state machine — one simulated unloading shift.
//!
//! RULES:
//!   - State is mutated only by event handlers, one event at a time.
//!   - An arriving truck enters service immediately only if the crew
//!     is free AND not on break; otherwise it joins the FIFO line.
//!   - The crew is never interrupted mid-service: a due break waits
//!     until the current truck is done.
//!   - New arrivals are generated only while the clock is at or before
//!     the arrival cutoff; trucks already in line past the cutoff are
//!     still served. Termination follows: SERVICE_END and BREAK_END
//!     are only ever reactions to prior events, so once arrivals stop
//!     the event chain is finite.

use crate::{
    config::ShiftParams,
    error::SimResult,
    event::{EventKind, EventQueue},
    rng::UniformStream,
    samplers::Samplers,
    table::CumulativeTable,
    types::{CrewSize, Minutes},
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How a due break is deferred while the crew is busy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakPolicy {
    /// Reschedule BREAK_START directly at the pending service-end
    /// minute. Preferred: one reschedule instead of one per minute.
    #[default]
    DeferUntilFree,
    /// Reschedule BREAK_START one minute at a time until the crew is
    /// free. Kept for comparison runs. The two policies trace the same
    /// trajectory except when a truck arrives at the exact minute the
    /// deferred break lands: the deferred BREAK_START was scheduled
    /// earlier under `DeferUntilFree`, so it wins the FIFO tie and the
    /// truck waits out the break instead of entering service first.
    RetryEveryMinute,
}

/// Trajectory summary of a drained shift. Costs are derived from this
/// and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftOutcome {
    /// Time of the last processed event — the shift's effective end.
    pub last_event_time: Minutes,
    /// Total minutes trucks spent in the waiting line.
    pub wait_minutes:    u64,
    /// ARRIVAL events processed.
    pub trucks_arrived:  u64,
    /// SERVICE_END events processed.
    pub trucks_served:   u64,
    /// (start, end) of the crew break, once it actually began.
    pub break_window:    Option<(Minutes, Minutes)>,
    /// `(arrival, service_start)` for each truck that had to wait, in
    /// dequeue order. Dequeue order must equal arrival order.
    pub wait_log:        Vec<(Minutes, Minutes)>,
}

/// Mutable per-shift state. Created fresh for every trial, discarded
/// once the event queue drains.
struct ShiftState {
    clock:           Minutes,
    waiting:         VecDeque<Minutes>,
    crew_free:       bool,
    on_break:        bool,
    /// Scheduled end of the service in progress, while the crew is busy.
    busy_until:      Option<Minutes>,
    wait_minutes:    u64,
    last_event_time: Minutes,
    trucks_arrived:  u64,
    trucks_served:   u64,
    break_started:   Option<Minutes>,
    break_ended:     Option<Minutes>,
    wait_log:        Vec<(Minutes, Minutes)>,
}

impl ShiftState {
    fn new() -> Self {
        Self {
            clock:           0,
            waiting:         VecDeque::new(),
            crew_free:       true,
            on_break:        false,
            busy_until:      None,
            wait_minutes:    0,
            last_event_time: 0,
            trucks_arrived:  0,
            trucks_served:   0,
            break_started:   None,
            break_ended:     None,
            wait_log:        Vec::new(),
        }
    }
}

struct ShiftRun<'a, A: UniformStream, S: UniformStream> {
    params:        &'a ShiftParams,
    policy:        BreakPolicy,
    service_table: &'a CumulativeTable<Minutes>,
    samplers:      &'a Samplers,
    arrivals:      &'a mut A,
    service:       &'a mut S,
    queue:         EventQueue,
    state:         ShiftState,
}

impl<A: UniformStream, S: UniformStream> ShiftRun<'_, A, S> {
    /// Seed the queue: trucks already at the dock, the first future
    /// arrival, and the break becoming due at its fixed offset.
    fn bootstrap(&mut self) {
        let initial = self.samplers.initial_trucks(self.arrivals.next_f64());
        for _ in 0..initial {
            self.queue.schedule(0, EventKind::Arrival);
        }

        let first_gap = self.samplers.interarrival_minutes(self.arrivals.next_f64());
        self.queue.schedule(first_gap, EventKind::Arrival);
        self.queue
            .schedule(self.params.break_offset_min, EventKind::BreakStart);
    }

    /// Put the truck that just reached the crew into service.
    fn start_service(&mut self) {
        let duration = self.service_table.sample(self.service.next_f64());
        let done_at = self.state.clock + duration;
        self.queue.schedule(done_at, EventKind::ServiceEnd);
        self.state.crew_free = false;
        self.state.busy_until = Some(done_at);
    }

    /// Dequeue the longest-waiting truck, charge its wait, serve it.
    fn serve_from_line(&mut self) {
        let arrived_at = self
            .state
            .waiting
            .pop_front()
            .expect("caller checked the line is non-empty");
        self.state.wait_minutes += (self.state.clock - arrived_at) as u64;
        self.state.wait_log.push((arrived_at, self.state.clock));
        self.start_service();
    }

    fn on_arrival(&mut self) {
        self.state.trucks_arrived += 1;
        if self.state.crew_free && !self.state.on_break {
            self.start_service();
        } else {
            self.state.waiting.push_back(self.state.clock);
        }

        // Past the cutoff the arrival process stops, but the line
        // above still drains — the asymmetry is intentional.
        if self.state.clock <= self.params.arrival_cutoff_min {
            let gap = self.samplers.interarrival_minutes(self.arrivals.next_f64());
            self.queue
                .schedule(self.state.clock + gap, EventKind::Arrival);
        }
    }

    fn on_service_end(&mut self) {
        self.state.trucks_served += 1;
        if !self.state.waiting.is_empty() && !self.state.on_break {
            // Crew rolls straight into the next truck, never idle.
            self.serve_from_line();
        } else {
            self.state.crew_free = true;
            self.state.busy_until = None;
        }
    }

    fn on_break_start(&mut self) {
        if !self.state.crew_free {
            let resume_at = match self.policy {
                BreakPolicy::DeferUntilFree => {
                    self.state.busy_until.expect("busy crew has a pending service end")
                }
                BreakPolicy::RetryEveryMinute => self.state.clock + 1,
            };
            self.queue.schedule(resume_at, EventKind::BreakStart);
        } else {
            self.state.on_break = true;
            self.state.break_started = Some(self.state.clock);
            self.queue.schedule(
                self.state.clock + self.params.break_duration_min,
                EventKind::BreakEnd,
            );
        }
    }

    fn on_break_end(&mut self) {
        self.state.on_break = false;
        self.state.break_ended = Some(self.state.clock);
        if !self.state.waiting.is_empty() {
            self.serve_from_line();
        }
    }

    fn run(mut self) -> ShiftOutcome {
        self.bootstrap();

        while let Some(event) = self.queue.pop() {
            self.state.clock = event.time;
            self.state.last_event_time = self.state.last_event_time.max(event.time);
            log::debug!(
                "t={} {:?} line={} free={} break={}",
                event.time,
                event.kind,
                self.state.waiting.len(),
                self.state.crew_free,
                self.state.on_break
            );

            match event.kind {
                EventKind::Arrival => self.on_arrival(),
                EventKind::ServiceEnd => self.on_service_end(),
                EventKind::BreakStart => self.on_break_start(),
                EventKind::BreakEnd => self.on_break_end(),
            }
        }

        debug_assert!(
            self.state.waiting.is_empty(),
            "queue drained with trucks still waiting"
        );
        debug_assert_eq!(self.state.trucks_arrived, self.state.trucks_served);

        ShiftOutcome {
            last_event_time: self.state.last_event_time,
            wait_minutes:    self.state.wait_minutes,
            trucks_arrived:  self.state.trucks_arrived,
            trucks_served:   self.state.trucks_served,
            break_window:    self.state.break_started.zip(self.state.break_ended),
            wait_log:        self.state.wait_log,
        }
    }
}

/// Run one shift to completion. The two streams must be independent —
/// one drives arrivals, the other service times.
///
/// Fails only if `crew` has no configured service-time table; once the
/// inputs validate, the simulation itself cannot fail.
pub fn simulate_shift<A, S>(
    params: &ShiftParams,
    policy: BreakPolicy,
    samplers: &Samplers,
    crew: CrewSize,
    arrivals: &mut A,
    service: &mut S,
) -> SimResult<ShiftOutcome>
where
    A: UniformStream,
    S: UniformStream,
{
    let service_table = samplers.service_table(crew)?;
    let shift = ShiftRun {
        params,
        policy,
        service_table,
        samplers,
        arrivals,
        service,
        queue: EventQueue::new(),
        state: ShiftState::new(),
    };
    Ok(shift.run())
}
