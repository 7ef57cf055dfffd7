//! The outcome of a single matcher invocation
use std::fmt::{Debug, Formatter};

/// A message which is either already rendered or rendered on demand
enum Message {
    Ready(String),
    Deferred(Box<dyn Fn() -> String>),
}

/// A pass/fail outcome together with a human-readable explanation.
///
/// Most assertions pass and never look at their explanation, so matchers usually build a
/// [Verdict] with [Verdict::lazy] and only pay for formatting when [Verdict::message] is called.
pub struct Verdict {
    pass: bool,
    message: Message,
}

impl Verdict {
    /// A passing verdict with a precomputed message
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            pass: true,
            message: Message::Ready(message.into()),
        }
    }

    /// A failing verdict with a precomputed message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            pass: false,
            message: Message::Ready(message.into()),
        }
    }

    /// A verdict whose message is produced by `message` each time it is read
    pub fn lazy<F>(pass: bool, message: F) -> Self
    where
        F: Fn() -> String + 'static,
    {
        Self {
            pass,
            message: Message::Deferred(Box::new(message)),
        }
    }

    pub fn passed(&self) -> bool {
        self.pass
    }

    /// Render the explanation for this verdict
    pub fn message(&self) -> String {
        match &self.message {
            Message::Ready(s) => s.clone(),
            Message::Deferred(f) => f(),
        }
    }

    /// Whether an assertion built on this verdict holds, given the negation flag of the caller
    pub fn holds(&self, is_not: bool) -> bool {
        self.pass != is_not
    }
}

impl Debug for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verdict")
            .field("pass", &self.pass)
            .field("message", &self.message())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Verdict;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn lazy_messages_should_only_render_when_read() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let verdict = Verdict::lazy(false, move || {
            counter.set(counter.get() + 1);
            "rendered".to_string()
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(verdict.message(), "rendered");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn lazy_and_eager_messages_should_be_equivalent() {
        let eager = Verdict::fail("same text");
        let lazy = Verdict::lazy(false, || "same text".to_string());
        assert_eq!(eager.passed(), lazy.passed());
        assert_eq!(eager.message(), lazy.message());
    }

    #[test]
    fn negation_should_flip_whether_a_verdict_holds() {
        assert!(Verdict::pass("").holds(false));
        assert!(!Verdict::pass("").holds(true));
        assert!(Verdict::fail("").holds(true));
    }
}
