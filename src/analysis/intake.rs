use crate::analysis::classifier::{classify, suggested_response};
use crate::analysis::sla::sla_deadline;
use crate::analysis::tags::extract_tags;
use crate::commands::settings::EffectiveIntakeSettings;
use crate::error::{DeskError, DeskResult};
use crate::models::ticket::{
    AiClassification, Customer, NewTicketFields, Priority, Sentiment, Ticket, TicketStatus,
    TicketType,
};
use rand::Rng;

/// Knobs that shape a single intake, taken from the desk settings.
#[derive(Debug, Clone, Copy)]
pub struct IntakeOptions {
    pub auto_classify: bool,
    pub confidence_floor: f64,
    pub confidence_ceiling: f64,
    pub auto_reply_threshold: f64,
    pub default_priority: Priority,
    pub default_type: TicketType,
}

impl From<&EffectiveIntakeSettings> for IntakeOptions {
    fn from(settings: &EffectiveIntakeSettings) -> Self {
        Self {
            auto_classify: settings.auto_classify,
            confidence_floor: settings.confidence_floor,
            confidence_ceiling: settings.confidence_ceiling,
            auto_reply_threshold: settings.auto_reply_threshold,
            default_priority: settings.default_priority,
            default_type: settings.default_type,
        }
    }
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self::from(&EffectiveIntakeSettings::default())
    }
}

/// Required-field presence only. Email format and duplicate submissions are
/// not checked.
pub fn validate_fields(fields: &NewTicketFields) -> DeskResult<()> {
    let required = [
        ("subject", fields.subject.as_str()),
        ("description", fields.description.as_str()),
        ("customer.name", fields.customer.name.as_str()),
        ("customer.email", fields.customer.email.as_str()),
    ];

    match required.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(DeskError::MissingField(*name)),
        None => Ok(()),
    }
}

/// Uniform draw in `[floor, ceiling)`; collapses to `floor` for an empty range.
pub fn draw_confidence<R: Rng>(rng: &mut R, floor: f64, ceiling: f64) -> f64 {
    if ceiling > floor {
        rng.random_range(floor..ceiling)
    } else {
        floor
    }
}

/// Assemble the immutable ticket record. Pure apart from the rng draws.
pub fn build_ticket<R: Rng>(
    fields: &NewTicketFields,
    id: String,
    now: i64,
    options: &IntakeOptions,
    rng: &mut R,
) -> Ticket {
    let priority = fields.priority.unwrap_or(options.default_priority);
    let advisory_type = fields.ticket_type.unwrap_or(options.default_type);

    let (ticket_type, sentiment, assigned_team) = if options.auto_classify {
        let classification = classify(&fields.description);
        (
            classification.ticket_type,
            classification.sentiment,
            Some(classification.team),
        )
    } else {
        (advisory_type, Sentiment::Neutral, None)
    };

    let tags = extract_tags(&fields.subject, &fields.description);
    log::debug!("ticket {id} tagged {tags:?}");

    let confidence = draw_confidence(rng, options.confidence_floor, options.confidence_ceiling);
    let auto_reply_generated = rng.random::<f64>() > options.auto_reply_threshold;

    let company = fields
        .customer
        .company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    Ticket {
        id,
        subject: fields.subject.trim().to_string(),
        description: fields.description.trim().to_string(),
        customer: Customer {
            name: fields.customer.name.trim().to_string(),
            email: fields.customer.email.trim().to_string(),
            company,
        },
        priority,
        status: TicketStatus::New,
        ticket_type,
        sentiment,
        assigned_team,
        assigned_agent: None,
        created_at: now,
        updated_at: now,
        sla_deadline: sla_deadline(priority, now),
        tags,
        ai_classification: AiClassification {
            confidence,
            suggested_response: Some(suggested_response(ticket_type).to_string()),
            auto_reply_generated,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ticket::CustomerFields;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn login_bug_fields() -> NewTicketFields {
        NewTicketFields {
            subject: "Can't log in".to_string(),
            description: "I have a login bug".to_string(),
            customer: CustomerFields {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                company: None,
            },
            priority: Some(Priority::Urgent),
            ticket_type: Some(TicketType::Billing),
        }
    }

    #[test]
    fn classifier_overrides_advisory_type() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = 1_700_000_000;
        let ticket = build_ticket(
            &login_bug_fields(),
            "TK-001".to_string(),
            now,
            &IntakeOptions::default(),
            &mut rng,
        );

        assert_eq!(ticket.ticket_type, TicketType::Technical);
        assert_eq!(ticket.assigned_team.as_deref(), Some("Technical Support"));
        assert_eq!(ticket.sentiment, Sentiment::Negative);
        assert_eq!(ticket.sla_deadline, now + 3600);
        assert_eq!(ticket.status, TicketStatus::New);
        assert_eq!(ticket.created_at, ticket.updated_at);
        assert!(ticket.tags.contains(&"login".to_string()));
        assert!(ticket.tags.contains(&"bug".to_string()));
        assert_eq!(
            ticket.ai_classification.suggested_response.as_deref(),
            Some("Technical troubleshooting steps and system diagnostics")
        );
    }

    #[test]
    fn advisory_type_kept_when_auto_classification_is_off() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = IntakeOptions {
            auto_classify: false,
            ..IntakeOptions::default()
        };
        let ticket = build_ticket(&login_bug_fields(), "TK-001".to_string(), 0, &options, &mut rng);

        assert_eq!(ticket.ticket_type, TicketType::Billing);
        assert_eq!(ticket.sentiment, Sentiment::Neutral);
        assert_eq!(ticket.assigned_team, None);
    }

    #[test]
    fn missing_priority_uses_form_default() {
        let mut rng = StdRng::seed_from_u64(1);
        let fields = NewTicketFields {
            priority: None,
            ..login_bug_fields()
        };
        let ticket = build_ticket(&fields, "TK-001".to_string(), 0, &IntakeOptions::default(), &mut rng);
        assert_eq!(ticket.priority, Priority::Medium);
        assert_eq!(ticket.sla_deadline, 8 * 3600);
    }

    #[test]
    fn confidence_stays_in_configured_range_and_is_reproducible() {
        let options = IntakeOptions::default();
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let a = build_ticket(&login_bug_fields(), "TK-001".to_string(), 0, &options, &mut first);
            let b = build_ticket(&login_bug_fields(), "TK-001".to_string(), 0, &options, &mut second);
            assert!((0.85..0.95).contains(&a.ai_classification.confidence));
            assert_eq!(a.ai_classification, b.ai_classification);
        }
    }

    #[test]
    fn empty_confidence_range_collapses_to_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(draw_confidence(&mut rng, 0.9, 0.9), 0.9);
    }

    #[test]
    fn blank_company_is_dropped() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut fields = login_bug_fields();
        fields.customer.company = Some("   ".to_string());
        let ticket = build_ticket(&fields, "TK-001".to_string(), 0, &IntakeOptions::default(), &mut rng);
        assert_eq!(ticket.customer.company, None);
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut fields = login_bug_fields();
        fields.customer.email = "  ".to_string();
        assert_eq!(validate_fields(&fields), Err(DeskError::MissingField("customer.email")));

        let mut fields = login_bug_fields();
        fields.subject.clear();
        assert_eq!(validate_fields(&fields), Err(DeskError::MissingField("subject")));

        assert_eq!(validate_fields(&login_bug_fields()), Ok(()));
    }
}
