//! Fade-in reveal for content sections as they scroll into view.

use std::rc::Rc;

use web_sys::{Document, Element, IntersectionObserver, Window};

use crate::config::{
    FADE_UP_DURATION, FADE_UP_INITIAL_Y, FALLBACK_VIEWPORT_RATIO, REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD,
    SCROLL_THROTTLE_MS, VIDEO_ITEM_STEP_MS, VIDEO_PREVIEW_DELAY_MS,
};
use crate::dom::{self, Markup, WindowListener};
use crate::error::DomError;
use crate::schedule::{Scheduler, Throttle};
use crate::watcher::{self, VisibilityWatcher, WatchOptions};

pub const FADE_IN: &str = "fade-in";
pub const ACTIVE: &str = "active";

const VIDEO_ITEMS: &str = ".list ul li";
const PENDING_VIDEO_ITEMS: &str = ".list ul li.fade-in";
const PENDING_PREVIEW: &str = ".preview.fade-in";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Articles,
    Gallery,
    Features,
    Testimonials,
    Team,
    Services,
    Skills,
    WorkSteps,
    Events,
    Pricing,
    Videos,
    Stats,
}

impl SectionKind {
    pub const ALL: [SectionKind; 12] = [
        SectionKind::Articles,
        SectionKind::Gallery,
        SectionKind::Features,
        SectionKind::Testimonials,
        SectionKind::Team,
        SectionKind::Services,
        SectionKind::Skills,
        SectionKind::WorkSteps,
        SectionKind::Events,
        SectionKind::Pricing,
        SectionKind::Videos,
        SectionKind::Stats,
    ];

    pub fn class(self) -> &'static str {
        match self {
            SectionKind::Articles => "articles",
            SectionKind::Gallery => "gallery",
            SectionKind::Features => "features",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Team => "team",
            SectionKind::Services => "services",
            SectionKind::Skills => "skills",
            SectionKind::WorkSteps => "work-steps",
            SectionKind::Events => "events",
            SectionKind::Pricing => "pricing",
            SectionKind::Videos => "videos",
            SectionKind::Stats => "stats",
        }
    }

    /// Sections whose cards slide up while fading in.
    pub fn fades_up(self) -> bool {
        matches!(
            self,
            SectionKind::Features | SectionKind::Testimonials | SectionKind::Team | SectionKind::Gallery
        )
    }

    pub fn of<T: Markup>(section: &T) -> Option<SectionKind> {
        Self::ALL.into_iter().find(|kind| section.has_class(kind.class()))
    }

    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|kind| format!(".{}", kind.class()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Marks cards for reveal and records their stagger index.
pub fn prepare_cards<T: Markup>(cards: &[T], fade_up: bool) {
    for (index, card) in cards.iter().enumerate() {
        card.add_class(FADE_IN);
        card.set_style_property("--card-index", &index.to_string());
        if fade_up {
            card.set_style_property("--initial-y", FADE_UP_INITIAL_Y);
            card.set_style_property("--transition-duration", FADE_UP_DURATION);
        }
    }
}

pub fn prepare_videos<T: Markup>(holder: &T, items: &[T], preview: Option<&T>) {
    holder.add_class(FADE_IN);
    for (index, item) in items.iter().enumerate() {
        item.add_class(FADE_IN);
        item.set_style_property("--item-index", &index.to_string());
    }
    if let Some(preview) = preview {
        preview.add_class(FADE_IN);
    }
}

pub fn video_item_delay(index: usize) -> u32 {
    VIDEO_ITEM_STEP_MS.saturating_mul(index as u32)
}

/// Activates video list items one after another, then the preview block.
pub fn stagger_video_children<T: Markup>(items: &[T], preview: Option<&T>, scheduler: &dyn Scheduler) {
    for (index, item) in items.iter().enumerate() {
        let item = item.clone();
        scheduler.after(video_item_delay(index), Box::new(move || item.add_class(ACTIVE)));
    }
    if let Some(preview) = preview {
        let preview = preview.clone();
        scheduler.after(VIDEO_PREVIEW_DELAY_MS, Box::new(move || preview.add_class(ACTIVE)));
    }
}

pub struct VideoChildren<T> {
    pub items: Vec<T>,
    pub preview: Option<T>,
}

/// Adds `active` on the next frame, staggering video children if given.
pub fn activate<T: Markup>(target: T, videos: Option<VideoChildren<T>>, scheduler: Rc<dyn Scheduler>) {
    let sched = scheduler.clone();
    scheduler.next_frame(Box::new(move |_: f64| {
        target.add_class(ACTIVE);
        if let Some(videos) = videos {
            stagger_video_children(&videos.items, videos.preview.as_ref(), &*sched);
        }
    }));
}

/// Handles a watched target coming into view and tells whether it should
/// stay watched. Only a videos section does; `video_children` is asked for
/// its children and is never called for other targets.
pub fn on_reveal<T, F>(target: &T, video_children: F, scheduler: Rc<dyn Scheduler>) -> bool
where
    T: Markup,
    F: FnOnce(&T) -> Option<VideoChildren<T>>,
{
    let is_videos = target.has_class(SectionKind::Videos.class());
    let children = if is_videos { video_children(target) } else { None };
    activate(target.clone(), children, scheduler);
    is_videos
}

/// Scroll-fallback activation. `video_items` is set when the element sits in
/// a videos section.
pub fn reveal_in_place<T: Markup>(element: &T, video_items: Option<Vec<T>>, scheduler: &dyn Scheduler) {
    element.add_class(ACTIVE);
    if let Some(items) = video_items {
        stagger_video_children(&items, None, scheduler);
    }
}

/// Position check used when the browser cannot watch visibility for us.
pub fn in_fallback_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height * FALLBACK_VIEWPORT_RATIO && bottom > 0.0
}

/// Keeps the reveal machinery alive for as long as the page is mounted.
pub struct ScrollReveal {
    _watcher: Option<VisibilityWatcher>,
    _scroll: Option<WindowListener>,
}

impl ScrollReveal {
    pub fn attach(window: &Window, document: &Document, scheduler: Rc<dyn Scheduler>) -> Result<Self, DomError> {
        prepare_sections(document)?;

        if watcher::is_supported(window) {
            let watcher = watch(document, scheduler)?;
            Ok(Self {
                _watcher: Some(watcher),
                _scroll: None,
            })
        } else {
            log::info!("IntersectionObserver unavailable, revealing on scroll position");
            let listener = watch_scroll(window, document, scheduler)?;
            Ok(Self {
                _watcher: None,
                _scroll: Some(listener),
            })
        }
    }
}

fn prepare_sections(document: &Document) -> Result<(), DomError> {
    for section in dom::document_query_all(document, &SectionKind::selector())? {
        if let Some(title) = dom::query(&section, ".main-title")? {
            title.add_class(FADE_IN);
        }

        let fade_up = SectionKind::of(&section).map(SectionKind::fades_up).unwrap_or(false);
        let cards = dom::query_all(&section, ".box, .card")?;
        if let Some(container) = cards.first().and_then(|card| card.parent_element()) {
            container.add_class("cards-container");
        }
        prepare_cards(&cards, fade_up);

        if section.has_class(SectionKind::Videos.class()) {
            if let Some(holder) = dom::query(&section, ".holder")? {
                let items = dom::query_all(&holder, VIDEO_ITEMS)?;
                let preview = dom::query(&holder, ".preview")?;
                prepare_videos(&holder, &items, preview.as_ref());
            }
        }
    }
    Ok(())
}

fn video_children(section: &Element) -> Result<VideoChildren<Element>, DomError> {
    Ok(VideoChildren {
        items: dom::query_all(section, PENDING_VIDEO_ITEMS)?,
        preview: dom::query(section, PENDING_PREVIEW)?,
    })
}

fn watch(document: &Document, scheduler: Rc<dyn Scheduler>) -> Result<VisibilityWatcher, DomError> {
    let options = WatchOptions::new(REVEAL_THRESHOLD, REVEAL_BOTTOM_MARGIN);
    let watcher = VisibilityWatcher::new(options, move |target: &Element, observer: &IntersectionObserver| {
        let lookup = |section: &Element| {
            video_children(section)
                .map_err(|err| log::warn!("video children lookup failed: {}", err))
                .ok()
        };
        // The videos section keeps being watched so its children restagger.
        if !on_reveal(target, lookup, scheduler.clone()) {
            observer.unobserve(target);
        }
    })?;

    for element in dom::document_query_all(document, &format!(".{}", FADE_IN))? {
        watcher.observe(&element);
    }
    for section in dom::document_query_all(document, ".videos")? {
        watcher.observe(&section);
    }
    Ok(watcher)
}

fn watch_scroll(window: &Window, document: &Document, scheduler: Rc<dyn Scheduler>) -> Result<WindowListener, DomError> {
    check_scroll(window, document, &*scheduler);

    let throttle = Throttle::new(SCROLL_THROTTLE_MS);
    let win = window.clone();
    let document = document.clone();
    WindowListener::new(window, "scroll", move || {
        let window = win.clone();
        let document = document.clone();
        let sched = scheduler.clone();
        throttle.call(&*scheduler, move || check_scroll(&window, &document, &*sched));
    })
}

fn check_scroll(window: &Window, document: &Document, scheduler: &dyn Scheduler) {
    if let Err(err) = try_check_scroll(window, document, scheduler) {
        log::warn!("scroll reveal check failed: {}", err);
    }
}

fn try_check_scroll(window: &Window, document: &Document, scheduler: &dyn Scheduler) -> Result<(), DomError> {
    let height = dom::viewport_height(window);
    for element in dom::document_query_all(document, ".fade-in:not(.active)")? {
        let rect = element.get_bounding_client_rect();
        if !in_fallback_view(rect.top(), rect.bottom(), height) {
            continue;
        }
        let video_items = if element.closest(".videos")?.is_some() {
            Some(dom::query_all(&element, PENDING_VIDEO_ITEMS)?)
        } else {
            None
        };
        reveal_in_place(&element, video_items, scheduler);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dom::testing::FakeNode;
    use crate::schedule::testing::ManualScheduler;

    #[test]
    fn selector_covers_every_section_kind() {
        let selector = SectionKind::selector();
        assert!(selector.starts_with(".articles, .gallery"));
        assert!(selector.ends_with(".videos, .stats"));
        assert_eq!(selector.matches(", ").count(), 11);
    }

    #[test]
    fn section_kind_is_read_from_classes() {
        let team = FakeNode::with_classes(&["team", "section"]);
        assert_eq!(SectionKind::of(&team), Some(SectionKind::Team));
        assert!(SectionKind::Team.fades_up());
        assert!(!SectionKind::Pricing.fades_up());
        assert_eq!(SectionKind::of(&FakeNode::with_classes(&["hero"])), None);
    }

    #[test]
    fn cards_get_index_and_fade_up_variant() {
        let cards = vec![FakeNode::default(), FakeNode::default(), FakeNode::default()];
        prepare_cards(&cards, true);

        for (index, card) in cards.iter().enumerate() {
            assert!(card.has_class(FADE_IN));
            assert_eq!(card.style("--card-index"), Some(index.to_string()));
            assert_eq!(card.style("--initial-y").as_deref(), Some("25px"));
            assert_eq!(card.style("--transition-duration").as_deref(), Some("0.5s"));
        }

        let plain = vec![FakeNode::default()];
        prepare_cards(&plain, false);
        assert_eq!(plain[0].style("--initial-y"), None);
    }

    #[test]
    fn activation_waits_for_the_next_frame() {
        let scheduler = Rc::new(ManualScheduler::new());
        let card = FakeNode::with_classes(&[FADE_IN]);
        activate(card.clone(), None, scheduler.clone());

        assert!(!card.has_class(ACTIVE));
        scheduler.run_frame(16.0);
        assert!(card.has_class(ACTIVE));
    }

    #[test]
    fn video_items_activate_in_index_order_with_growing_delay() {
        let scheduler = Rc::new(ManualScheduler::new());
        let section = FakeNode::with_classes(&["videos"]);
        let items: Vec<FakeNode> = (0..4).map(|_| FakeNode::with_classes(&[FADE_IN])).collect();
        let preview = FakeNode::with_classes(&[FADE_IN]);

        let children = VideoChildren {
            items: items.clone(),
            preview: Some(preview.clone()),
        };
        activate(section.clone(), Some(children), scheduler.clone());
        scheduler.run_frame(0.0);
        assert!(section.has_class(ACTIVE));

        let delays: Vec<u32> = (0..items.len()).map(video_item_delay).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));

        for (index, item) in items.iter().enumerate() {
            scheduler.advance(if index == 0 { 0 } else { 100 });
            let active: Vec<bool> = items.iter().map(|i| i.has_class(ACTIVE)).collect();
            let expected: Vec<bool> = (0..items.len()).map(|i| i <= index).collect();
            assert_eq!(active, expected);
            assert!(item.has_class(ACTIVE));
        }
        assert!(preview.has_class(ACTIVE));
    }

    #[test]
    fn preview_waits_for_its_own_delay() {
        let scheduler = ManualScheduler::new();
        let preview = FakeNode::default();
        stagger_video_children::<FakeNode>(&[], Some(&preview), &scheduler);

        scheduler.advance(299);
        assert!(!preview.has_class(ACTIVE));
        scheduler.advance(1);
        assert!(preview.has_class(ACTIVE));
    }

    #[test]
    fn fallback_view_uses_ninety_percent_of_viewport() {
        assert!(in_fallback_view(100.0, 300.0, 1000.0));
        assert!(in_fallback_view(899.0, 1200.0, 1000.0));
        assert!(!in_fallback_view(900.0, 1200.0, 1000.0));
        assert!(!in_fallback_view(-400.0, 0.0, 1000.0));
        assert!(in_fallback_view(-400.0, 1.0, 1000.0));
    }

    fn video_section(items: usize) -> (FakeNode, VideoChildren<FakeNode>) {
        let children = VideoChildren {
            items: (0..items).map(|_| FakeNode::with_classes(&[FADE_IN])).collect(),
            preview: Some(FakeNode::with_classes(&[FADE_IN])),
        };
        (FakeNode::with_classes(&["videos"]), children)
    }

    #[test]
    fn cards_stop_being_watched_once_revealed() {
        let scheduler = Rc::new(ManualScheduler::new());
        let card = FakeNode::with_classes(&["box", FADE_IN]);
        let looked_up = Cell::new(false);

        let keep = on_reveal(
            &card,
            |_: &FakeNode| {
                looked_up.set(true);
                None
            },
            scheduler.clone(),
        );

        assert!(!keep);
        assert!(!looked_up.get());
        scheduler.run_frame(16.0);
        assert!(card.has_class(ACTIVE));
    }

    #[test]
    fn videos_section_stays_watched_and_restaggers() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (section, _) = video_section(3);

        for round in 1..=2 {
            let keep = on_reveal(&section, |_: &FakeNode| Some(video_section(3).1), scheduler.clone());
            assert!(keep);
            scheduler.run_frame(f64::from(round) * 16.0);
            // three items plus the preview per sighting, nothing run yet
            assert_eq!(scheduler.pending_timers(), 4 * round as usize);
        }
        assert!(section.has_class(ACTIVE));

        scheduler.advance(300);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn fallback_staggers_items_inside_videos_only() {
        let scheduler = ManualScheduler::new();
        let (holder, children) = video_section(3);
        reveal_in_place(&holder, Some(children.items.clone()), &scheduler);

        assert!(holder.has_class(ACTIVE));
        assert_eq!(scheduler.pending_timers(), 3);
        scheduler.advance(100);
        let active: Vec<bool> = children.items.iter().map(|i| i.has_class(ACTIVE)).collect();
        assert_eq!(active, vec![true, true, false]);
        scheduler.advance(100);
        assert!(children.items.iter().all(|i| i.has_class(ACTIVE)));
        assert!(!children.preview.as_ref().unwrap().has_class(ACTIVE));

        let card = FakeNode::with_classes(&[FADE_IN]);
        reveal_in_place(&card, None, &scheduler);
        assert!(card.has_class(ACTIVE));
        assert_eq!(scheduler.pending_timers(), 0);
    }
}
