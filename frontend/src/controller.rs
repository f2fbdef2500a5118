use std::rc::Rc;

use crate::animators::{reveal::ScrollReveal, skills::SkillsProgress, stats::StatsCounter};
use crate::dom;
use crate::error::DomError;
use crate::schedule::{BrowserScheduler, Scheduler};

/// Wires the scroll animations onto the mounted page.
///
/// Everything it sets up lives as long as the controller: dropping it stops
/// pending timers and frames, disconnects the visibility watchers and
/// removes the window listeners. The navigation menu is driven by the
/// header component itself.
pub struct PageInteractionController {
    scheduler: Rc<dyn Scheduler>,
    _reveal: Option<ScrollReveal>,
    _skills: Option<SkillsProgress>,
    _stats: Option<StatsCounter>,
}

impl PageInteractionController {
    pub fn attach() -> Result<Self, DomError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new(window.clone()));

        // One animator failing should not take the others down with it.
        let reveal = ScrollReveal::attach(&window, &document, scheduler.clone())
            .map_err(|err| log::warn!("scroll reveal disabled: {}", err))
            .ok();
        let skills = SkillsProgress::attach(&window, &document, scheduler.clone())
            .map_err(|err| log::warn!("skills animation disabled: {}", err))
            .ok()
            .flatten();
        let stats = StatsCounter::attach(&document, scheduler.clone())
            .map_err(|err| log::warn!("stats counter disabled: {}", err))
            .ok()
            .flatten();

        log::info!(
            "page interactions attached (reveal: {}, skills: {}, stats: {})",
            reveal.is_some(),
            skills.is_some(),
            stats.is_some()
        );

        Ok(Self {
            scheduler,
            _reveal: reveal,
            _skills: skills,
            _stats: stats,
        })
    }
}

impl Drop for PageInteractionController {
    fn drop(&mut self) {
        self.scheduler.cancel_all();
        log::debug!("page interactions detached");
    }
}
