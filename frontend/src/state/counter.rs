use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suffix {
    Percent,
    Plus,
    Bare,
}

impl Suffix {
    fn detect(text: &str) -> Self {
        if text.contains('%') {
            Suffix::Percent
        } else if text.contains('+') {
            Suffix::Plus
        } else {
            Suffix::Bare
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Suffix::Percent => "%",
            Suffix::Plus => "+",
            Suffix::Bare => "",
        }
    }
}

/// Parses the leading integer of `text`: optional whitespace, optional
/// sign, then digits. Anything after the digits is ignored.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i64>().ok().map(|value| sign * value)
}

/// Count-up animation for a single stat heading.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    original: String,
    target: Option<f64>,
    step: f64,
    current: f64,
    suffix: Suffix,
    started: bool,
    done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Tick,
}

impl StatCounter {
    pub fn parse(text: &str, steps: u32) -> Self {
        let target = parse_leading_int(text).map(|v| v as f64);
        let step = match target {
            Some(t) if steps > 0 => t / f64::from(steps),
            _ => 0.0,
        };
        // A zero or negative step can never reach the target from 0.
        let done = !(step > 0.0 && step.is_finite());
        let current = match target {
            Some(t) if done => t,
            _ => 0.0,
        };
        Self {
            original: text.to_string(),
            target,
            step,
            current,
            suffix: Suffix::detect(text),
            started: false,
            done,
        }
    }

    /// Advances one interval tick. Returns false once the counter is terminal.
    pub fn tick(&mut self) -> bool {
        if self.done {
            return false;
        }
        let Some(target) = self.target else {
            self.done = true;
            return false;
        };
        self.started = true;
        self.current += self.step;
        if self.current >= target {
            self.current = target;
            self.done = true;
        }
        true
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The authored text until the first tick, then the running count.
    pub fn text(&self) -> String {
        if !self.started && !self.done {
            return self.original.clone();
        }
        match self.target {
            Some(_) => format!("{}{}", self.current.floor() as i64, self.suffix.as_str()),
            None => self.original.clone(),
        }
    }
}

impl Reducible for StatCounter {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CounterAction::Tick => {
                if self.done {
                    return self;
                }
                let mut next = (*self).clone();
                next.tick();
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn run_to_end(counter: &mut StatCounter) -> usize {
        let mut ticks = 0;
        while counter.tick() {
            ticks += 1;
            assert!(ticks <= 1_000, "counter never terminated");
        }
        ticks
    }

    #[test]
    fn parses_leading_integers() {
        assert_eq!(parse_leading_int("50+"), Some(50));
        assert_eq!(parse_leading_int("  98%"), Some(98));
        assert_eq!(parse_leading_int("-3 days"), Some(-3));
        assert_eq!(parse_leading_int("Years"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("+"), None);
    }

    #[test]
    fn preserves_suffix_while_counting() {
        let mut counter = StatCounter::parse("50+", 100);
        assert!(counter.tick());
        assert_eq!(counter.text(), "0+");
        run_to_end(&mut counter);
        assert_eq!(counter.text(), "50+");

        let mut percent = StatCounter::parse("100%", 100);
        percent.tick();
        assert_eq!(percent.text(), "1%");
        run_to_end(&mut percent);
        assert_eq!(percent.text(), "100%");
    }

    #[test]
    fn shows_authored_text_until_first_tick() {
        let mut counter = StatCounter::parse("50+", 100);
        assert_eq!(counter.text(), "50+");
        counter.tick();
        assert_eq!(counter.text(), "0+");
    }

    #[test]
    fn bare_numbers_stay_bare() {
        let mut counter = StatCounter::parse("12", 100);
        run_to_end(&mut counter);
        assert_eq!(counter.text(), "12");
    }

    #[test]
    fn stops_at_target_within_step_budget() {
        let mut counter = StatCounter::parse("250", 100);
        let ticks = run_to_end(&mut counter);
        assert!((100..=101).contains(&ticks));
        assert!(counter.is_done());
    }

    #[test]
    fn zero_target_is_terminal_immediately() {
        let mut counter = StatCounter::parse("0%", 100);
        assert!(counter.is_done());
        assert!(!counter.tick());
        assert_eq!(counter.text(), "0%");
    }

    #[test]
    fn negative_target_is_terminal_immediately() {
        let counter = StatCounter::parse("-5", 100);
        assert!(counter.is_done());
        assert_eq!(counter.text(), "-5");
    }

    #[test]
    fn non_numeric_text_is_left_alone() {
        let mut counter = StatCounter::parse("Many", 100);
        assert!(counter.is_done());
        assert!(!counter.tick());
        assert_eq!(counter.text(), "Many");
    }

    #[test]
    fn reducer_returns_same_rc_when_done() {
        let counter = Rc::new(StatCounter::parse("0", 100));
        let next = counter.clone().reduce(CounterAction::Tick);
        assert!(Rc::ptr_eq(&counter, &next));
    }

    proptest! {
        #[test]
        fn terminal_value_is_idempotent(target in 0u32..100_000, suffix in prop_oneof![Just(""), Just("%"), Just("+")]) {
            let mut counter = StatCounter::parse(&format!("{}{}", target, suffix), 100);
            run_to_end(&mut counter);
            let settled = counter.text();
            prop_assert_eq!(&settled, &format!("{}{}", target, suffix));
            for _ in 0..5 {
                prop_assert!(!counter.tick());
                prop_assert_eq!(&counter.text(), &settled);
            }
        }
    }
}
