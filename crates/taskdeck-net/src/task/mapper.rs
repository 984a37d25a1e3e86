//! Translation between the backend's Portuguese task keys and [`Task`].
//!
//! The backend speaks `nome`, `descricao`, `prioridade`, `situacao`,
//! `dataPrevistaConclusao`, `dataCriacao` and `idUser`. Some endpoints echo
//! the English keys instead, so decoding accepts either; when both are
//! present and non-empty the Portuguese key wins. Encoding always writes the
//! Portuguese keys.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::{Priority, Situation, Task};

/// A task in the backend's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "WireTask")]
pub struct BackendTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub prioridade: Option<Priority>,
    pub situacao: Option<Situation>,
    #[serde(rename = "dataPrevistaConclusao")]
    pub data_prevista_conclusao: Option<NaiveDate>,
    #[serde(rename = "dataCriacao", skip_serializing_if = "Option::is_none")]
    pub data_criacao: Option<String>,
    #[serde(rename = "idUser", skip_serializing_if = "Option::is_none")]
    pub id_user: Option<String>,
}

/// Everything a backend task body may carry, under either naming.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTask {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    nome: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    descricao: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    prioridade: Option<Priority>,
    #[serde(default)]
    priority: Option<Priority>,
    #[serde(default)]
    situacao: Option<Situation>,
    #[serde(default)]
    situation: Option<Situation>,
    #[serde(default)]
    data_prevista_conclusao: Option<NaiveDate>,
    #[serde(default)]
    expected_completion_date: Option<NaiveDate>,
    #[serde(default)]
    data_criacao: Option<String>,
    #[serde(default)]
    creation_date: Option<String>,
    #[serde(default)]
    id_user: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

/// `preferred`, unless it is missing or empty.
fn text_or(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred.filter(|s| !s.is_empty()).or(fallback)
}

impl From<WireTask> for BackendTask {
    fn from(wire: WireTask) -> Self {
        Self {
            id: wire.id,
            nome: text_or(wire.nome, wire.name),
            descricao: text_or(wire.descricao, wire.description),
            prioridade: wire.prioridade.or(wire.priority),
            situacao: wire.situacao.or(wire.situation),
            data_prevista_conclusao: wire
                .data_prevista_conclusao
                .or(wire.expected_completion_date),
            data_criacao: text_or(wire.data_criacao, wire.creation_date),
            id_user: text_or(wire.id_user, wire.user_id),
        }
    }
}

impl From<BackendTask> for Task {
    fn from(task: BackendTask) -> Self {
        Self {
            id: task.id,
            name: task.nome.unwrap_or_default(),
            description: task.descricao,
            priority: task.prioridade,
            situation: task.situacao,
            expected_completion_date: task.data_prevista_conclusao,
            creation_date: task.data_criacao,
            user_id: task.id_user,
        }
    }
}

impl From<&Task> for BackendTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            nome: Some(task.name.clone()),
            descricao: task.description.clone(),
            prioridade: task.priority,
            situacao: task.situation,
            data_prevista_conclusao: task.expected_completion_date,
            data_criacao: task.creation_date.clone(),
            id_user: task.user_id.clone(),
        }
    }
}
