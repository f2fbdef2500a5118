//! Progress bars in the skills section, filled in one by one on first view.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, Window};

use crate::config::{SKILLS_BOTTOM_MARGIN, SKILLS_THRESHOLD, SKILL_BAR_STEP_MS};
use crate::dom::{self, Markup, WindowListener};
use crate::error::DomError;
use crate::schedule::Scheduler;
use crate::watcher::{OneShot, VisibilityWatcher, WatchOptions};

const SHOW: &str = "show";

/// Reads the leading whole number of an inline width such as `"80%"`.
pub fn parse_percent(width: &str) -> Option<u32> {
    let trimmed = width.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Pixel offset of a `percent` mark along a track `track_width` px wide.
pub fn label_offset(track_width: f64, percent: u32) -> f64 {
    track_width * f64::from(percent) / 100.0
}

pub fn bar_delay(index: usize) -> u32 {
    SKILL_BAR_STEP_MS.saturating_mul(index as u32)
}

/// A bar's track and the percentage label that rides along it.
#[derive(Clone)]
pub struct Gauge<T> {
    pub track: T,
    pub label: T,
    pub percent: u32,
}

impl<T: Markup> Gauge<T> {
    pub fn position_label(&self) {
        let left = label_offset(self.track.width(), self.percent);
        self.label.set_style_property("left", &format!("{}px", left));
    }
}

#[derive(Clone)]
pub struct SkillRow<T> {
    pub holder: T,
    pub gauge: Option<Gauge<T>>,
}

/// Staggered, one-time reveal of all skill rows.
pub struct SkillsReveal<T> {
    rows: Vec<SkillRow<T>>,
    fired: OneShot,
    scheduler: Rc<dyn Scheduler>,
}

impl<T: Markup> SkillsReveal<T> {
    pub fn new(rows: Vec<SkillRow<T>>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            rows,
            fired: OneShot::new(),
            scheduler,
        }
    }

    /// Starts the reveal. Returns false if it already ran.
    pub fn on_visible(&self) -> bool {
        if !self.fired.fire() {
            return false;
        }
        for (index, row) in self.rows.iter().enumerate() {
            let row = row.clone();
            self.scheduler.after(
                bar_delay(index),
                Box::new(move || {
                    row.holder.add_class(SHOW);
                    if let Some(gauge) = &row.gauge {
                        gauge.position_label();
                    }
                }),
            );
        }
        true
    }

    pub fn reposition(&self) {
        for gauge in self.rows.iter().filter_map(|row| row.gauge.as_ref()) {
            gauge.position_label();
        }
    }
}

pub struct SkillsProgress {
    _watcher: VisibilityWatcher,
    _resize: WindowListener,
}

impl SkillsProgress {
    pub fn attach(window: &Window, document: &Document, scheduler: Rc<dyn Scheduler>) -> Result<Option<Self>, DomError> {
        let Some(section) = dom::document_query(document, ".skills")? else {
            log::debug!("no skills section, skipping progress bars");
            return Ok(None);
        };

        if let Some(progress) = dom::query(&section, ".progress")? {
            progress.add_class("animate-on-scroll");
        }

        let mut rows = Vec::new();
        for holder in dom::query_all(&section, ".prog-holder")? {
            let gauge = build_gauge(document, &holder)?;
            rows.push(SkillRow { holder, gauge });
        }
        let reveal = Rc::new(SkillsReveal::new(rows, scheduler));

        let on_view = reveal.clone();
        let watched = section.clone();
        let watcher = VisibilityWatcher::new(
            WatchOptions::new(SKILLS_THRESHOLD, SKILLS_BOTTOM_MARGIN),
            move |_: &Element, observer: &IntersectionObserver| {
                if on_view.on_visible() {
                    log::debug!("skills section visible, filling bars");
                }
                observer.unobserve(&watched);
            },
        )?;
        watcher.observe(&section);

        let resize = WindowListener::new(window, "resize", move || reveal.reposition())?;

        Ok(Some(Self {
            _watcher: watcher,
            _resize: resize,
        }))
    }
}

/// Adds the percentage label to a holder and places it. `None` when the
/// holder has no bar or its width can't be read.
fn build_gauge(document: &Document, holder: &Element) -> Result<Option<Gauge<Element>>, DomError> {
    let Some(bar) = dom::query(holder, ".prog span")? else {
        return Ok(None);
    };
    let Some(track) = bar.closest(".prog")? else {
        return Ok(None);
    };
    let width = match bar.dyn_ref::<HtmlElement>() {
        Some(bar) => bar.style().get_property_value("width")?,
        None => String::new(),
    };
    let Some(percent) = parse_percent(&width) else {
        log::debug!("skipping progress bar with unreadable width {:?}", width);
        return Ok(None);
    };

    track.set_style_property("--progress-width", &width);

    let label = document.create_element("div")?;
    label.set_class_name("progress-percent");
    label.set_text_content(Some(&width));
    holder.append_child(&label)?;

    let gauge = Gauge { track, label, percent };
    gauge.position_label();
    Ok(Some(gauge))
}
