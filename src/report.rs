use crate::navigator::Outcome;
use std::io::{self, Write};

pub fn write_report<W: Write>(outcome: &Outcome, out: &mut W) -> io::Result<()> {
    match outcome {
        Outcome::ReachedTarget { hops } => writeln!(out, "Reached Philosophy in {} hops.", hops),
        Outcome::LoopDetected { .. } => writeln!(out, "Loop detected. Exiting."),
        Outcome::DeadEnd { .. } => writeln!(out, "No further links found. Exiting."),
        Outcome::HopLimitExceeded { max_hops } => {
            writeln!(out, "Did not reach Philosophy within {} hops.", max_hops)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(outcome: Outcome) -> String {
        let mut out = Vec::new();
        write_report(&outcome, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn each_outcome_has_its_own_line() {
        assert_eq!(
            render(Outcome::ReachedTarget { hops: 7 }),
            "Reached Philosophy in 7 hops.\n"
        );
        assert_eq!(
            render(Outcome::LoopDetected { page: "a".into() }),
            "Loop detected. Exiting.\n"
        );
        assert_eq!(
            render(Outcome::DeadEnd { page: "a".into() }),
            "No further links found. Exiting.\n"
        );
        assert_eq!(
            render(Outcome::HopLimitExceeded { max_hops: 100 }),
            "Did not reach Philosophy within 100 hops.\n"
        );
    }
}
