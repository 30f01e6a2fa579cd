use crate::core::kinematics::MotionCoefficients;

/// Absolute grading band for free-numeric answers, in joules.
pub const APEX_ENERGY_TOLERANCE_J: f64 = 1.0;

/// Multiple-choice facts about the trajectory apex. Only one is true.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApexFact {
    VerticalVelocityZero,
    SpeedZero,
    KineticEnergyZero,
    PotentialEnergyZero,
}

impl ApexFact {
    pub const CHOICES: [ApexFact; 4] = [
        ApexFact::VerticalVelocityZero,
        ApexFact::SpeedZero,
        ApexFact::KineticEnergyZero,
        ApexFact::PotentialEnergyZero,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ApexFact::VerticalVelocityZero => "The vertical velocity is zero",
            ApexFact::SpeedZero => "The projectile momentarily stops",
            ApexFact::KineticEnergyZero => "The kinetic energy is zero",
            ApexFact::PotentialEnergyZero => "The potential energy is zero",
        }
    }
}

/// One question, parameterized from the current run. Created fresh per
/// question and discarded after grading; re-grading the same item against a
/// different answer is allowed but no other retry state exists.
#[derive(Clone, Debug)]
pub enum QuizItem {
    /// Free numeric answer graded within an absolute tolerance band.
    Numeric {
        prompt: String,
        reference: f64,
        tolerance: f64,
    },
    /// Discrete answer graded by exact variant match.
    Choice { prompt: String, correct: ApexFact },
}

impl QuizItem {
    pub fn prompt(&self) -> &str {
        match self {
            QuizItem::Numeric { prompt, .. } | QuizItem::Choice { prompt, .. } => prompt,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum QuizAnswer {
    Numeric(f64),
    Choice(ApexFact),
}

/// The classic trap question: at the apex the vertical velocity vanishes but
/// the horizontal component persists, so the kinetic energy is 0.5*m*vx^2,
/// not zero.
pub fn apex_energy_question(coeffs: MotionCoefficients, mass_kg: f64) -> QuizItem {
    QuizItem::Numeric {
        prompt: "What is the kinetic energy (J) at the highest point of the flight?".to_string(),
        reference: 0.5 * mass_kg * coeffs.vx_mps * coeffs.vx_mps,
        tolerance: APEX_ENERGY_TOLERANCE_J,
    }
}

pub fn apex_fact_question() -> QuizItem {
    QuizItem::Choice {
        prompt: "Which statement is true at the highest point of the flight?".to_string(),
        correct: ApexFact::VerticalVelocityZero,
    }
}

/// No partial credit; an answer of the wrong kind is simply incorrect.
pub fn grade(item: &QuizItem, answer: &QuizAnswer) -> bool {
    match (item, answer) {
        (QuizItem::Numeric { reference, tolerance, .. }, QuizAnswer::Numeric(value)) => {
            (value - reference).abs() <= *tolerance
        }
        (QuizItem::Choice { correct, .. }, QuizAnswer::Choice(picked)) => picked == correct,
        _ => false,
    }
}
