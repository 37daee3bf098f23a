//! Ключ состояния документа Docbuilder.
//!
//! Ключ состоит из трёх символов:
//! 1. возможность отправки: `n` / `i` / `g`;
//! 2. выполнены ли требования: `n` / `y` или `-`, пока неизвестно;
//! 3. этап жизненного цикла: `x` / `n` / `p` / `l` или `-`.
//!
//! Таблицы контента используют ключи того же вида, но с `*` в любой позиции.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Символ-заполнитель для ещё не вычисленной позиции
pub const PLACEHOLDER: char = '-';

/// Символ подстановки в ключах таблиц контента
pub const WILDCARD: char = '*';

/// Длина ключа состояния
pub const STATE_KEY_LEN: usize = 3;

// ============================================================================
// Алфавиты позиций
// ============================================================================

/// Позиция 1: класс отправки шаблона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Submittability {
    NotSubmittable,
    /// Блокировка сразу после отправки
    Immediate,
    GracePeriod,
}

impl Submittability {
    pub fn as_char(self) -> char {
        match self {
            Submittability::NotSubmittable => 'n',
            Submittability::Immediate => 'i',
            Submittability::GracePeriod => 'g',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(Submittability::NotSubmittable),
            'i' => Some(Submittability::Immediate),
            'g' => Some(Submittability::GracePeriod),
            _ => None,
        }
    }
}

/// Позиция 2: выполнены ли требования документа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementsMet {
    No,
    Yes,
    Undetermined,
}

impl RequirementsMet {
    pub fn as_char(self) -> char {
        match self {
            RequirementsMet::No => 'n',
            RequirementsMet::Yes => 'y',
            RequirementsMet::Undetermined => PLACEHOLDER,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'n' => Some(RequirementsMet::No),
            'y' => Some(RequirementsMet::Yes),
            PLACEHOLDER => Some(RequirementsMet::Undetermined),
            _ => None,
        }
    }
}

impl From<bool> for RequirementsMet {
    fn from(met: bool) -> Self {
        if met {
            RequirementsMet::Yes
        } else {
            RequirementsMet::No
        }
    }
}

/// Позиция 3: этап жизненного цикла отправки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    NotApplicable,
    NotSubmitted,
    Pending,
    Locked,
    Undetermined,
}

impl Lifecycle {
    pub fn as_char(self) -> char {
        match self {
            Lifecycle::NotApplicable => 'x',
            Lifecycle::NotSubmitted => 'n',
            Lifecycle::Pending => 'p',
            Lifecycle::Locked => 'l',
            Lifecycle::Undetermined => PLACEHOLDER,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Lifecycle::NotApplicable),
            'n' => Some(Lifecycle::NotSubmitted),
            'p' => Some(Lifecycle::Pending),
            'l' => Some(Lifecycle::Locked),
            PLACEHOLDER => Some(Lifecycle::Undetermined),
            _ => None,
        }
    }
}

// ============================================================================
// StateKey
// ============================================================================

/// Ключ состояния документа, например `"gyp"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateKey {
    pub submittability: Submittability,
    pub requirements: RequirementsMet,
    pub lifecycle: Lifecycle,
}

impl StateKey {
    pub fn new(
        submittability: Submittability,
        requirements: RequirementsMet,
        lifecycle: Lifecycle,
    ) -> Self {
        Self {
            submittability,
            requirements,
            lifecycle,
        }
    }

    /// Начальный ключ: известен только класс отправки
    pub fn initial(submittability: Submittability) -> Self {
        Self::new(
            submittability,
            RequirementsMet::Undetermined,
            Lifecycle::Undetermined,
        )
    }

    /// Новый ключ с заменённой второй позицией
    pub fn with_requirements_met(self, requirements: RequirementsMet) -> Self {
        Self {
            requirements,
            ..self
        }
    }

    /// Новый ключ с заменённой третьей позицией
    pub fn with_lifecycle(self, lifecycle: Lifecycle) -> Self {
        Self { lifecycle, ..self }
    }

    /// Символы ключа по позициям
    pub fn chars(&self) -> [char; STATE_KEY_LEN] {
        [
            self.submittability.as_char(),
            self.requirements.as_char(),
            self.lifecycle.as_char(),
        ]
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for StateKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let &[s1, s2, s3] = chars.as_slice() else {
            return Err(format!(
                "State key must have {} characters: '{}'",
                STATE_KEY_LEN, s
            ));
        };
        let submittability = Submittability::from_char(s1)
            .ok_or_else(|| format!("Invalid submittability character '{}' in '{}'", s1, s))?;
        let requirements = RequirementsMet::from_char(s2)
            .ok_or_else(|| format!("Invalid requirements character '{}' in '{}'", s2, s))?;
        let lifecycle = Lifecycle::from_char(s3)
            .ok_or_else(|| format!("Invalid lifecycle character '{}' in '{}'", s3, s))?;
        Ok(Self::new(submittability, requirements, lifecycle))
    }
}

impl TryFrom<String> for StateKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StateKey> for String {
    fn from(key: StateKey) -> Self {
        key.to_string()
    }
}
