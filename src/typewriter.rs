use std::time::Duration;

use thiserror::Error;

pub const NAME: &str = "/Colby/Chance";
pub const JOKE: &str = "/Colby/Cheese";

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// The phases of the title animation:
/// 1) type the joke
/// 2) backspace the joke to the common prefix
/// 3) type the name correctly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    TypingJoke,
    ErasingJoke,
    TypingName,
    Done,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("pivot {pivot:?} is not a prefix of {text:?}")]
    PivotNotPrefix { pivot: String, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    joke: String,
    name: String,
    common: String,
    phase: Phase,
    text: String,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(JOKE, NAME)
    }
}

impl Typewriter {
    /// Pivots on the longest common prefix of `joke` and `name`.
    pub fn new(joke: &str, name: &str) -> Self {
        let common = common_prefix(joke, name).to_string();
        Self::build(joke, name, common)
    }

    /// Pivots on an explicit prefix, which must lead both strings or the
    /// erase phase could never stop.
    pub fn with_pivot(joke: &str, name: &str, common: &str) -> Result<Self, TypewriterError> {
        for text in [joke, name] {
            if !text.starts_with(common) {
                return Err(TypewriterError::PivotNotPrefix {
                    pivot: common.to_string(),
                    text: text.to_string(),
                });
            }
        }
        Ok(Self::build(joke, name, common.to_string()))
    }

    fn build(joke: &str, name: &str, common: String) -> Self {
        // start on the first character so the element doesn't pop in
        let text = char_prefix(joke, 1).to_string();
        Self {
            joke: joke.to_string(),
            name: name.to_string(),
            common,
            phase: Phase::TypingJoke,
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn common(&self) -> &str {
        &self.common
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Advances the animation by one step and returns the phase after it.
    ///
    /// A step either changes the text by one character or moves to the next
    /// phase, never both. Once [`Phase::Done`] is reached every call is a
    /// no-op.
    pub fn tick(&mut self) -> Phase {
        let shown = self.text.chars().count();
        match self.phase {
            Phase::TypingJoke => {
                if self.text == self.joke {
                    self.phase = Phase::ErasingJoke;
                } else {
                    self.text = char_prefix(&self.joke, shown + 1).to_string();
                }
            }
            Phase::ErasingJoke => {
                if self.text == self.common {
                    self.phase = Phase::TypingName;
                } else {
                    self.text = char_prefix(&self.joke, shown.saturating_sub(1)).to_string();
                }
            }
            Phase::TypingName => {
                if self.text == self.name {
                    self.phase = Phase::Done;
                } else {
                    self.text = char_prefix(&self.name, shown + 1).to_string();
                }
            }
            Phase::Done => {}
        }
        self.phase
    }

    /// Every distinct text the animation shows from now until it is done.
    pub fn frames(self) -> Frames {
        Frames { typewriter: self }
    }
}

pub struct Frames {
    typewriter: Typewriter,
}

impl Iterator for Frames {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.typewriter.is_done() {
            let before = self.typewriter.text.len();
            self.typewriter.tick();
            if self.typewriter.text.len() != before {
                return Some(self.typewriter.text.clone());
            }
        }
        None
    }
}

/// The first `n` characters of `s`, or all of it when shorter.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()));
    &a[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_until(tw: &mut Typewriter, phase: Phase) {
        for _ in 0..100 {
            if tw.phase() == phase {
                return;
            }
            tw.tick();
        }
        panic!("never reached {phase:?}");
    }

    #[test]
    fn test_initial_state() {
        let tw = Typewriter::default();
        assert_eq!(tw.phase(), Phase::TypingJoke);
        assert_eq!(tw.text(), "/");
        assert_eq!(tw.common(), "/Colby/Ch");
    }

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix(JOKE, NAME), "/Colby/Ch");
        assert_eq!(common_prefix("abc", "abcdef"), "abc");
        assert_eq!(common_prefix("xyz", "abc"), "");
        assert_eq!(common_prefix("héllo", "hélp"), "hél");
    }

    #[test]
    fn test_typing_joke_grows_by_one() {
        let mut tw = Typewriter::default();
        while tw.phase() == Phase::TypingJoke && tw.text() != JOKE {
            let prev = tw.text().len();
            tw.tick();
            assert_eq!(tw.text().len(), prev + 1);
            assert!(JOKE.starts_with(tw.text()));
        }
        assert_eq!(tw.text(), JOKE);
        assert_eq!(tw.phase(), Phase::TypingJoke);

        // the transition tick only changes the phase
        assert_eq!(tw.tick(), Phase::ErasingJoke);
        assert_eq!(tw.text(), JOKE);
    }

    #[test]
    fn test_erasing_stops_at_common() {
        let mut tw = Typewriter::default();
        tick_until(&mut tw, Phase::ErasingJoke);
        while tw.text() != "/Colby/Ch" {
            let prev = tw.text().len();
            assert_eq!(tw.tick(), Phase::ErasingJoke);
            assert_eq!(tw.text().len(), prev - 1);
            assert!(JOKE.starts_with(tw.text()));
        }
        assert_eq!(tw.tick(), Phase::TypingName);
        assert_eq!(tw.text(), "/Colby/Ch");
    }

    #[test]
    fn test_typing_name_ends_done() {
        let mut tw = Typewriter::default();
        tick_until(&mut tw, Phase::TypingName);
        while tw.text() != NAME {
            let prev = tw.text().len();
            assert_eq!(tw.tick(), Phase::TypingName);
            assert_eq!(tw.text().len(), prev + 1);
            assert!(NAME.starts_with(tw.text()));
        }
        assert_eq!(tw.tick(), Phase::Done);
        assert_eq!(tw.text(), NAME);
    }

    #[test]
    fn test_done_is_absorbing() {
        let mut tw = Typewriter::default();
        tick_until(&mut tw, Phase::Done);
        for _ in 0..50 {
            assert_eq!(tw.tick(), Phase::Done);
            assert_eq!(tw.text(), "/Colby/Chance");
        }
    }

    #[test]
    fn test_full_sequence() {
        let frames = Typewriter::default().frames().collect::<Vec<_>>();
        let expected = [
            "/C",
            "/Co",
            "/Col",
            "/Colb",
            "/Colby",
            "/Colby/",
            "/Colby/C",
            "/Colby/Ch",
            "/Colby/Che",
            "/Colby/Chee",
            "/Colby/Chees",
            "/Colby/Cheese",
            "/Colby/Chees",
            "/Colby/Chee",
            "/Colby/Che",
            "/Colby/Ch",
            "/Colby/Cha",
            "/Colby/Chan",
            "/Colby/Chanc",
            "/Colby/Chance",
        ];
        assert_eq!(frames, expected);
    }

    #[test]
    fn test_tick_count() {
        // 12 typed + 1 pivot + 4 erased + 1 pivot + 4 typed + 1 done
        let mut tw = Typewriter::default();
        let mut ticks = 0;
        while !tw.is_done() {
            tw.tick();
            ticks += 1;
        }
        assert_eq!(ticks, 23);
    }

    #[test]
    fn test_identical_strings() {
        let frames = Typewriter::new("/same", "/same").frames().collect::<Vec<_>>();
        assert_eq!(frames, ["/s", "/sa", "/sam", "/same"]);
    }

    #[test]
    fn test_no_shared_prefix() {
        let mut tw = Typewriter::new("ab", "xy");
        assert_eq!(tw.common(), "");
        let frames = tw.clone().frames().collect::<Vec<_>>();
        assert_eq!(frames, ["ab", "a", "", "x", "xy"]);
        tick_until(&mut tw, Phase::Done);
        assert_eq!(tw.text(), "xy");
    }

    #[test]
    fn test_multibyte_characters() {
        let frames = Typewriter::new("/ñü", "/ñx").frames().collect::<Vec<_>>();
        assert_eq!(frames, ["/ñ", "/ñü", "/ñ", "/ñx"]);
    }

    #[test]
    fn test_with_pivot() {
        let tw = Typewriter::with_pivot(JOKE, NAME, "/Colby/").expect("pivot leads both");
        let frames = tw.frames().collect::<Vec<_>>();
        let turn = frames
            .iter()
            .position(|f| f == JOKE)
            .expect("joke should be typed out");
        let shortest = frames[turn..].iter().min_by_key(|f| f.len());
        assert_eq!(shortest.map(String::as_str), Some("/Colby/"));
        assert_eq!(frames.last().map(String::as_str), Some(NAME));

        let err = Typewriter::with_pivot(JOKE, NAME, "/Colby/Che").unwrap_err();
        assert_eq!(
            err,
            TypewriterError::PivotNotPrefix {
                pivot: "/Colby/Che".to_string(),
                text: NAME.to_string(),
            }
        );
    }
}
