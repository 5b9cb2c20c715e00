//! Practice session: walks a scenario's bot prompts and logs scored replies
//!
//! Owned by the caller; the coach itself keeps no state between turns.

use crate::core::coach::Coach;
use crate::error::SessionError;
use crate::types::{Feedback, Scenario, SessionSummary, TurnRecord};

/// One user's run through a scenario
#[derive(Debug, Clone)]
pub struct PracticeSession {
    scenario: Scenario,
    turn: usize,
    log: Vec<TurnRecord>,
}

impl PracticeSession {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            turn: 0,
            log: Vec::new(),
        }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Index of the prompt awaiting a reply
    pub fn turn_index(&self) -> usize {
        self.turn
    }

    pub fn total_prompts(&self) -> usize {
        self.scenario.prompt_count()
    }

    /// Bot prompt awaiting a reply, None once the scenario is done
    pub fn current_prompt(&self) -> Option<&str> {
        self.scenario.bot_prompts().get(self.turn).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.turn >= self.total_prompts()
    }

    /// Score a reply to the current prompt and advance
    pub fn submit(&mut self, reply: &str, coach: &Coach) -> Result<Feedback, SessionError> {
        let prompt = self
            .current_prompt()
            .ok_or(SessionError::Finished)?
            .to_string();

        let feedback = coach.evaluate(reply);
        self.log.push(TurnRecord::new(prompt, reply, feedback.scores, feedback.advice.clone()));
        self.turn += 1;
        Ok(feedback)
    }

    pub fn log(&self) -> &[TurnRecord] {
        &self.log
    }

    pub fn last_turn(&self) -> Option<&TurnRecord> {
        self.log.last()
    }

    pub fn summary(&self) -> Option<SessionSummary> {
        SessionSummary::from_turns(&self.log)
    }

    /// Back to the first prompt with an empty log
    pub fn restart(&mut self) {
        self.turn = 0;
        self.log.clear();
    }
}
