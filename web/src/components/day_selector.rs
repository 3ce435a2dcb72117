use leptos::prelude::*;
use shared_types::{TimeOfDay, Weekday};
use thaw::{Radio, RadioGroup};

/// Form state for one day of the week: whether it is selected, and the
/// chosen moment while it is.
#[derive(Clone, Copy)]
pub struct DayState {
    pub dia: Weekday,
    pub checked: RwSignal<bool>,
    pub momento: RwSignal<String>,
}

impl DayState {
    pub fn new(dia: Weekday) -> Self {
        Self {
            dia,
            checked: RwSignal::new(false),
            momento: RwSignal::new(TimeOfDay::Manana.as_str().to_string()),
        }
    }
}

/// Seven independent toggles, one per day, multi-select.
#[component]
pub fn DayCheckboxes(days: Vec<DayState>) -> impl IntoView {
    view! {
        <div class="day-checkbox-grid">
            {days.into_iter().map(|day| {
                view! {
                    <label class="day-checkbox-label">
                        <input
                            type="checkbox"
                            class="day-checkbox"
                            on:change=move |ev| {
                                let is_checked = event_target_checked(&ev);
                                day.checked.set(is_checked);
                                if !is_checked {
                                    // A dropped day forgets its choice; the
                                    // next toggle starts from the default.
                                    day.momento.set(TimeOfDay::Manana.as_str().to_string());
                                }
                            }
                            checked=move || day.checked.get()
                        />
                        <span class="day-name">{day.dia.as_str()}</span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_day_starts_unchecked_with_the_morning_default() {
        let state = DayState::new(Weekday::Martes);
        assert!(!state.checked.get_untracked());
        assert_eq!(
            state.momento.get_untracked(),
            TimeOfDay::Manana.as_str().to_string()
        );
    }
}

/// One three-way moment choice per currently selected day.
#[component]
pub fn TimePickers(days: Vec<DayState>) -> impl IntoView {
    view! {
        <div class="time-picker-list">
            {days.into_iter().map(|day| {
                view! {
                    <Show when=move || day.checked.get()>
                        <div class="time-picker-group">
                            <label class="time-picker-day">{format!("{}:", day.dia)}</label>
                            <RadioGroup value=day.momento>
                                {TimeOfDay::ALL.iter().map(|momento| {
                                    view! {
                                        <Radio value=momento.as_str() />
                                        <label>{momento.as_str()}</label>
                                    }
                                }).collect_view()}
                            </RadioGroup>
                        </div>
                    </Show>
                }
            }).collect_view()}
        </div>
    }
}
