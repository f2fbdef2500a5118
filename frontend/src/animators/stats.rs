//! Count-up animation for the numbers in the stats section.

use std::rc::Rc;

use web_sys::{Document, Element, IntersectionObserver};

use crate::config::{COUNTER_DURATION_MS, COUNTER_STEP_MS, STATS_BOTTOM_MARGIN, STATS_THRESHOLD};
use crate::dom::{self, Markup};
use crate::error::DomError;
use crate::schedule::Scheduler;
use crate::watcher::{OneShot, VisibilityWatcher, WatchOptions};

const THOUSANDS: char = 'K';

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    /// Displayed in thousands with a `K` suffix.
    pub abbreviated: bool,
}

/// Parses a displayed figure: `"500K"` is 500000, `"1,234"` is 1234.
pub fn parse_target(text: &str) -> Option<CounterTarget> {
    let text = text.trim();
    if let Some(number) = text.strip_suffix(THOUSANDS) {
        let value = leading_number(number, true)? * 1000.0;
        return Some(CounterTarget { value, abbreviated: true });
    }
    let value = leading_number(&text.replace(',', ""), false)?;
    Some(CounterTarget { value, abbreviated: false })
}

/// The numeric prefix of `text`, ignoring anything after it.
fn leading_number(text: &str, allow_fraction: bool) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;
    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if allow_fraction && !seen_point => seen_point = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok().filter(|v: &f64| v.is_finite())
}

pub fn counter_delay(index: usize) -> u32 {
    COUNTER_STEP_MS.saturating_mul(index as u32)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Time-based ramp from zero to a counter's target.
#[derive(Debug, Clone)]
pub struct CounterRamp {
    target: CounterTarget,
    literal: String,
    duration_ms: f64,
}

impl CounterRamp {
    pub fn new(literal: &str) -> Option<Self> {
        let target = parse_target(literal)?;
        Some(Self {
            target,
            literal: literal.to_string(),
            duration_ms: COUNTER_DURATION_MS,
        })
    }

    /// What to display `elapsed_ms` after the first frame. The last frame
    /// always shows the original literal.
    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return CounterFrame {
                text: self.literal.clone(),
                done: true,
            };
        }
        let value = (progress * self.target.value).floor();
        CounterFrame {
            text: self.format(value),
            done: false,
        }
    }

    fn format(&self, value: f64) -> String {
        let target = self.target.value;
        if self.target.abbreviated && target >= 1000.0 {
            let decimals = if target % 1000.0 == 0.0 { 0 } else { 1 };
            format!("{}{}", to_fixed(value / 1000.0, decimals), THOUSANDS)
        } else {
            // + 0.0 turns a -0 from flooring into 0
            format!("{}", value + 0.0)
        }
    }
}

/// Fixed-point text with halves rounded away from zero.
fn to_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale + 0.0;
    format!("{:.*}", decimals, rounded)
}

fn run_ramp<T: Markup>(element: T, ramp: CounterRamp, start: Option<f64>, scheduler: Rc<dyn Scheduler>) {
    let next = scheduler.clone();
    scheduler.next_frame(Box::new(move |timestamp: f64| {
        let start = start.unwrap_or(timestamp);
        let frame = ramp.frame(timestamp - start);
        element.set_text(&frame.text);
        if !frame.done {
            run_ramp(element, ramp, Some(start), next);
        }
    }));
}

/// All counters of the stats section; they animate together, once.
pub struct StatsCounters<T> {
    counters: Vec<T>,
    fired: OneShot,
    scheduler: Rc<dyn Scheduler>,
}

impl<T: Markup> StatsCounters<T> {
    pub fn new(counters: Vec<T>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            counters,
            fired: OneShot::new(),
            scheduler,
        }
    }

    /// Starts the count-up. Returns false if it already ran.
    pub fn on_visible(&self) -> bool {
        if !self.fired.fire() {
            return false;
        }
        for (index, counter) in self.counters.iter().enumerate() {
            let literal = counter.text();
            let Some(ramp) = CounterRamp::new(&literal) else {
                log::debug!("leaving non-numeric stat {:?} as is", literal);
                continue;
            };
            let counter = counter.clone();
            let scheduler = self.scheduler.clone();
            self.scheduler.after(
                counter_delay(index),
                Box::new(move || run_ramp(counter, ramp, None, scheduler)),
            );
        }
        true
    }
}

pub struct StatsCounter {
    _watcher: VisibilityWatcher,
}

impl StatsCounter {
    pub fn attach(document: &Document, scheduler: Rc<dyn Scheduler>) -> Result<Option<Self>, DomError> {
        let Some(section) = dom::document_query(document, ".stats")? else {
            log::debug!("no stats section, skipping counters");
            return Ok(None);
        };

        let counters = StatsCounters::new(dom::query_all(&section, ".number")?, scheduler);
        let watched = section.clone();
        let watcher = VisibilityWatcher::new(
            WatchOptions::new(STATS_THRESHOLD, STATS_BOTTOM_MARGIN),
            move |_: &Element, observer: &IntersectionObserver| {
                if counters.on_visible() {
                    log::debug!("stats section visible, counting up");
                }
                observer.unobserve(&watched);
            },
        )?;
        watcher.observe(&section);

        Ok(Some(Self { _watcher: watcher }))
    }
}
