use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::{APPLIED_STATUS, LOCATION_FALLBACK, external_id_from_url};

const SAMPLE_TITLE: &str = "Desenvolvedor Full Stack Senior";
const SAMPLE_COMPANY: &str = "Tech Solutions Brasil";
const SAMPLE_LOCATION: &str = "São Paulo, SP (Remoto)";
const SAMPLE_URL: &str = "https://www.linkedin.com/jobs/view/3756432109";
const SAMPLE_EXTERNAL_ID: &str = "3756432109";
const SAMPLE_DESCRIPTION: &str = "Estamos procurando um Desenvolvedor Full Stack Senior para se juntar ao nosso time inovador.

Responsabilidades:
• Desenvolver aplicações web usando React, Node.js e TypeScript
• Trabalhar com bancos de dados PostgreSQL e MongoDB
• Implementar APIs RESTful e GraphQL
• Colaborar com equipes multidisciplinares
• Participar de code reviews e mentoria

Requisitos:
• 5+ anos de experiência em desenvolvimento web
• Conhecimento sólido em JavaScript/TypeScript
• Experiência com React, Next.js, Node.js
• Conhecimento em bancos de dados relacionais e NoSQL
• Experiência com Git, CI/CD
• Inglês intermediário

Oferecemos:
• Salário competitivo (R$ 12.000 - R$ 18.000)
• Vale alimentação e refeição
• Plano de saúde e odontológico
• Férias flexíveis
• Orçamento para cursos e certificações";

const CUSTOM_DESCRIPTION: &str = "Dados inseridos manualmente pelo teste";
const CUSTOM_URL: &str = "https://www.linkedin.com/jobs/view/test";
const CUSTOM_EXTERNAL_ID_PREFIX: &str = "test_";

const APPLIED_DATE_FORMAT: &str = "%Y-%m-%d";
const EXTERNAL_ID_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// One job application as the capture API expects it. Field order matches
/// the JSON the browser extension sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPayload {
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
    pub external_id: String,
    pub status: String,
    pub applied_date: String,
}

/// Fields typed in at the custom-data prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomJobInput {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_url: Option<String>,
}

impl CustomJobInput {
    /// Custom testing only proceeds when both title and company were given.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.company.is_empty()
    }
}

/// Builds the realistic LinkedIn-style sample job for `user_id`.
#[must_use]
pub fn sample_job<Tz>(user_id: &str, now: &DateTime<Tz>) -> JobPayload
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    JobPayload {
        user_id: user_id.to_owned(),
        title: SAMPLE_TITLE.to_owned(),
        company: SAMPLE_COMPANY.to_owned(),
        location: SAMPLE_LOCATION.to_owned(),
        description: SAMPLE_DESCRIPTION.to_owned(),
        url: SAMPLE_URL.to_owned(),
        external_id: SAMPLE_EXTERNAL_ID.to_owned(),
        status: APPLIED_STATUS.to_owned(),
        applied_date: now.format(APPLIED_DATE_FORMAT).to_string(),
    }
}

/// Builds a payload from hand-entered fields. The user id is left empty;
/// it is filled in right before sending.
#[must_use]
pub fn custom_job<Tz>(input: &CustomJobInput, now: &DateTime<Tz>) -> JobPayload
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let location = if input.location.is_empty() {
        LOCATION_FALLBACK.to_owned()
    } else {
        input.location.clone()
    };
    let url = input
        .job_url
        .clone()
        .unwrap_or_else(|| CUSTOM_URL.to_owned());
    let external_id = input
        .job_url
        .as_deref()
        .and_then(external_id_from_url)
        .unwrap_or_else(|| {
            format!(
                "{}{}",
                CUSTOM_EXTERNAL_ID_PREFIX,
                now.format(EXTERNAL_ID_STAMP_FORMAT)
            )
        });

    JobPayload {
        user_id: String::new(),
        title: input.title.clone(),
        company: input.company.clone(),
        location,
        description: CUSTOM_DESCRIPTION.to_owned(),
        url,
        external_id,
        status: APPLIED_STATUS.to_owned(),
        applied_date: now.format(APPLIED_DATE_FORMAT).to_string(),
    }
}

impl JobPayload {
    #[must_use]
    pub fn with_user_id(mut self, user_id: &str) -> Self {
        user_id.clone_into(&mut self.user_id);
        self
    }

    /// Pretty JSON with non-ASCII text kept as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
