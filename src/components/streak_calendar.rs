//! Streak Calendar Component
//!
//! Seven-day strip ending today. Days covered by the current streak are lit.

use chrono::{Datelike, Duration, Local, NaiveDate};
use dioxus::prelude::*;
use ecoloop_core::OverlayId;
use ecoloop_ui::OverlayFrame;

/// One cell of the strip
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub lit: bool,
    pub is_today: bool,
}

impl CalendarDay {
    pub fn weekday_label(&self) -> String {
        self.date.weekday().to_string()
    }

    pub fn class(&self) -> &'static str {
        match (self.lit, self.is_today) {
            (true, true) => "streak-day lit today",
            (true, false) => "streak-day lit",
            (false, true) => "streak-day today",
            (false, false) => "streak-day",
        }
    }
}

/// The last seven days, oldest first. The streak counts back from today.
pub fn week_strip(today: NaiveDate, streak: u32) -> Vec<CalendarDay> {
    (0..7i64)
        .rev()
        .map(|days_ago| CalendarDay {
            date: today - Duration::days(days_ago),
            lit: days_ago < i64::from(streak),
            is_today: days_ago == 0,
        })
        .collect()
}

fn streak_caption(streak: u32) -> String {
    match streak {
        0 => "No streak yet. Log an eco-action today!".to_string(),
        1 => "1 day streak".to_string(),
        n => format!("{} day streak", n),
    }
}

#[component]
pub fn StreakCalendar(
    /// Whether the overlay is visible
    is_open: bool,
    /// Current streak from the session
    streak: u32,
    /// Dismissal callback
    on_close: EventHandler<()>,
) -> Element {
    let days = week_strip(Local::now().date_naive(), streak);

    rsx! {
        OverlayFrame {
            overlay: OverlayId::StreakCalendar,
            is_open: is_open,
            on_close: on_close,
            subtitle: streak_caption(streak),

            div { class: "streak-strip",
                for day in days {
                    div {
                        key: "{day.date}",
                        class: day.class(),
                        span { class: "streak-weekday", "{day.weekday_label()}" }
                        span { class: "streak-date", "{day.date.day()}" }
                    }
                }
            }
        }
    }
}
