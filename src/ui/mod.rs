//! Plain-text rendering of questions.

use std::io::{self, Write};

use crate::models::Question;

const CORRECT_MARKER: &str = "*";

pub fn render_question<W: Write>(
    out: &mut W,
    number: usize,
    question: &Question,
) -> io::Result<()> {
    writeln!(
        out,
        "Question {} (correct: {})",
        number,
        question.correct_answer_code()
    )?;

    for choice in question.choices() {
        let marker = if choice.code == question.correct_answer_code() {
            CORRECT_MARKER
        } else {
            " "
        };
        writeln!(out, "  {} {}) {}", marker, choice.code, choice.text)?;
    }

    if question.correct_choice().is_none() {
        writeln!(out, "  (no choice matches the correct answer code)")?;
    }

    Ok(())
}

pub fn render_all<W: Write>(out: &mut W, questions: &[Question]) -> io::Result<()> {
    for (index, question) in questions.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        render_question(out, index + 1, question)?;
    }
    Ok(())
}
