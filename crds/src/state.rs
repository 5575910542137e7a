// SPDX-FileCopyrightText: The submarine-operator Authors
//
// SPDX-License-Identifier: MIT

use crate::{SubmarineState, SubmarineStateType};

impl SubmarineState {
    pub fn creating() -> Self {
        Self {
            state: SubmarineStateType::Creating,
            error_message: None,
        }
    }

    pub fn running() -> Self {
        Self {
            state: SubmarineStateType::Running,
            error_message: None,
        }
    }

    /// The only state that carries an error message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            state: SubmarineStateType::Failed,
            error_message: Some(message.into()),
        }
    }
}
