//! User records managed from the admin pages and the labels derived from
//! them. The institutional bond is derived, never stored: staff roles win,
//! then an enrollment number marks a student, everyone else is external.

use crate::features::auth::types::Role;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub nome: Option<String>,
    pub tipo: Option<String>,
    pub matricula: Option<String>,
}

impl UserRecord {
    pub fn affiliation(&self) -> Affiliation {
        let staff = self
            .tipo
            .as_deref()
            .and_then(Role::parse)
            .is_some_and(|role| role.is_staff());
        if staff {
            return Affiliation::Staff;
        }

        let enrolled = self
            .matricula
            .as_deref()
            .is_some_and(|matricula| !matricula.trim().is_empty());
        if enrolled {
            Affiliation::Student
        } else {
            Affiliation::External
        }
    }

    pub fn display_name(&self) -> &str {
        self.nome.as_deref().unwrap_or("Sem nome")
    }

    pub fn role_label(&self) -> &str {
        self.tipo.as_deref().unwrap_or("-")
    }
}

/// Institutional bond shown on the users table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affiliation {
    Staff,
    Student,
    External,
}

impl Affiliation {
    pub fn label(&self) -> &'static str {
        match self {
            Affiliation::Staff => "Servidor",
            Affiliation::Student => "Aluno",
            Affiliation::External => "Externo",
        }
    }
}

/// Applies a confirmed delete to the displayed list.
pub fn remove_user(users: &mut Vec<UserRecord>, id: &str) {
    users.retain(|user| user.id != id);
}

/// Projection used by the dashboard stat cards and staff table.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UserRole {
    pub id: String,
    pub nome: Option<String>,
    pub tipo: Option<String>,
}

/// Rows holding a staff role.
pub fn staff_of(users: &[UserRole]) -> Vec<UserRole> {
    users
        .iter()
        .filter(|user| {
            user.tipo
                .as_deref()
                .and_then(Role::parse)
                .is_some_and(|role| role.is_staff())
        })
        .cloned()
        .collect()
}

/// Profile row inserted after the auth identity is created.
#[derive(Clone, Debug, Serialize)]
pub struct NewProfile {
    pub id: String,
    pub nome: String,
    pub tipo: String,
    pub matricula: Option<String>,
    pub cpf: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(tipo: Option<&str>, matricula: Option<&str>) -> UserRecord {
        UserRecord {
            id: "u1".to_string(),
            nome: Some("Ana".to_string()),
            tipo: tipo.map(str::to_string),
            matricula: matricula.map(str::to_string),
        }
    }

    #[test]
    fn staff_role_wins_over_enrollment() {
        assert_eq!(user(Some("admin"), Some("2023001")).affiliation(), Affiliation::Staff);
        assert_eq!(user(Some("superuser"), None).affiliation(), Affiliation::Staff);
    }

    #[test]
    fn enrollment_marks_a_student() {
        assert_eq!(user(None, Some("2023001")).affiliation(), Affiliation::Student);
        assert_eq!(user(Some("aluno"), Some("2023001")).affiliation(), Affiliation::Student);
    }

    #[test]
    fn no_role_and_no_enrollment_is_external() {
        assert_eq!(user(None, None).affiliation(), Affiliation::External);
        assert_eq!(user(None, Some("   ")).affiliation(), Affiliation::External);
        assert_eq!(user(Some("coordinator"), None).affiliation(), Affiliation::External);
    }

    #[test]
    fn remove_user_drops_only_the_confirmed_id() {
        let mut users = vec![user(None, None), {
            let mut other = user(None, None);
            other.id = "u2".to_string();
            other
        }];

        remove_user(&mut users, "u1");

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "u2");

        remove_user(&mut users, "missing");
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn staff_of_filters_recognized_staff_roles() {
        let rows = vec![
            UserRole { id: "a".into(), nome: None, tipo: Some("admin".into()) },
            UserRole { id: "b".into(), nome: None, tipo: Some("aluno".into()) },
            UserRole { id: "c".into(), nome: None, tipo: Some("superuser".into()) },
            UserRole { id: "d".into(), nome: None, tipo: None },
        ];

        let staff = staff_of(&rows);
        assert_eq!(staff.len(), 2);
        assert!(staff.iter().all(|user| user.id == "a" || user.id == "c"));
    }
}
