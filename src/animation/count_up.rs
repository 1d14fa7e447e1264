use yew::prelude::*;
use yew_hooks::use_interval;

use super::reveal::{use_reveal, ReplayPolicy, RevealState};
use crate::config;

/// Integer count from zero to `target`, eased out and ceiling-rounded on
/// every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    pub target: u32,
    pub duration_ms: u32,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self { target, duration_ms }
    }

    pub fn value_at(&self, elapsed_ms: u32) -> u32 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.target;
        }
        let progress = f64::from(elapsed_ms) / f64::from(self.duration_ms);
        let eased = 1.0 - (1.0 - progress).powi(3);
        let value = (f64::from(self.target) * eased).ceil() as u32;
        value.min(self.target)
    }

    pub fn is_finished(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[derive(Properties, PartialEq)]
pub struct CountUpNumberProps {
    pub target: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Shows 0 until scrolled into view, then counts up once.
#[function_component(CountUpNumber)]
pub fn count_up_number(props: &CountUpNumberProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), config::HEADING_REVEAL_OFFSET, ReplayPolicy::Once);
    let counter = CountUp::new(props.target, config::COUNT_UP_DURATION_MS);
    let elapsed = use_state(|| 0u32);

    let running = revealed == RevealState::Visible && !counter.is_finished(*elapsed);
    {
        let elapsed = elapsed.clone();
        let duration = counter.duration_ms;
        // A zero period pauses the interval.
        use_interval(
            move || elapsed.set((*elapsed + config::COUNT_UP_TICK_MS).min(duration)),
            if running { config::COUNT_UP_TICK_MS } else { 0 },
        );
    }

    html! {
        <span ref={node} class={props.class.clone()}>
            { counter.value_at(*elapsed) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(counter: CountUp, tick: u32) -> Vec<u32> {
        (0..=counter.duration_ms / tick + 1)
            .map(|i| counter.value_at(i * tick))
            .collect()
    }

    #[test]
    fn counts_to_target_without_going_backwards() {
        let counter = CountUp::new(150, 2000);
        let values = ticks(counter, 16);
        assert_eq!(values.first(), Some(&0));
        assert_eq!(values.last(), Some(&150));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.iter().all(|v| *v <= 150));
    }

    #[test]
    fn rounds_up_partial_values() {
        let counter = CountUp::new(5, 2000);
        // Any progress at all shows at least 1
        assert_eq!(counter.value_at(1), 1);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(CountUp::new(42, 0).value_at(0), 42);
    }

    #[test]
    fn holds_target_after_completion() {
        let counter = CountUp::new(50, 2000);
        assert_eq!(counter.value_at(2000), 50);
        assert_eq!(counter.value_at(9000), 50);
        assert!(counter.is_finished(2000));
        assert!(!counter.is_finished(1999));
    }
}
