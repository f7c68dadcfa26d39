#[cfg(test)]
mod campaigns {
    use erv::language::*;
    use erv::parsing::parse;
    use serde_json::json;

    #[test]
    fn end_to_end() {
        let parsed = parse("when a user registers\nsend the Welcome email");

        assert!(parsed.is_valid());
        assert_eq!(
            parsed.campaign,
            Campaign {
                trigger: Some(Trigger::Event {
                    event_type: "registers".to_string()
                }),
                steps: vec![Step::Email {
                    template_id: "welcome".to_string(),
                    custom_fields: vec![],
                }],
            }
        );
    }

    #[test]
    fn serialized_shape() {
        let parsed = parse("when a user registers\nsend the Welcome email");

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            value,
            json!({
                "campaign": {
                    "triggerKind": "Event",
                    "eventType": "registers",
                    "steps": [
                        {
                            "stepKind": "Email",
                            "templateId": "welcome",
                            "customFields": []
                        }
                    ]
                },
                "errors": []
            })
        );
    }

    #[test]
    fn serialized_recurring() {
        let content = r#"
every Monday and Friday at 9am and 1.30pm
if opened last email
wait for 2 hours
send the nudge email
    subject: Still there?
            "#;

        let parsed = parse(content);
        assert!(parsed.is_valid());

        let value = serde_json::to_value(&parsed.campaign).unwrap();
        assert_eq!(
            value,
            json!({
                "triggerKind": "Recurring",
                "weekdays": [1, 5],
                "hours": [900, 1330],
                "steps": [
                    { "stepKind": "Condition", "predicateId": "opened_last_email" },
                    { "stepKind": "Wait", "waitMinutes": 120 },
                    {
                        "stepKind": "Email",
                        "templateId": "nudge",
                        "customFields": [
                            { "key": "subject", "value": "Still there?" }
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn serialized_partial_results() {
        let parsed = parse("on 01/12/14 at 3pm\nwait for 5 kittens\ndance");

        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            value["campaign"],
            json!({
                "triggerKind": "OneOff",
                "localDatetime": "01/12/14 3pm",
                "steps": [
                    { "stepKind": "Wait" },
                    {}
                ]
            })
        );
        assert_eq!(
            value["errors"][0],
            json!({
                "line": { "lineNumber": 2, "rawText": "wait for 5 kittens" },
                "message": "\"kittens\" is not a valid wait unit.",
                "reason": "step-field"
            })
        );
        assert_eq!(value["errors"][1]["reason"], json!("step"));
    }

    #[test]
    fn placeholder_step_is_empty() {
        let parsed = parse("when a user x\ndance");

        let value = serde_json::to_value(&parsed.campaign).unwrap();
        assert_eq!(value["steps"], json!([{}]));
        assert_eq!(parsed.errors.len(), 1);
    }

    #[test]
    fn serialized_without_trigger() {
        let parsed = parse("");

        let value = serde_json::to_value(&parsed.campaign).unwrap();
        assert_eq!(value, json!({ "steps": [] }));
    }

    #[test]
    fn full_campaign() {
        let content = r#"
When a user makes a purchase
send the thank you email with custom fields
    subject: Thanks!
    body:
        We hope you enjoy it.
        Let us know how it goes.

        See you soon.
    signature: The team
wait for 3 days
if has not reviewed
send the review request email
        "#;

        let parsed = parse(content);
        assert!(parsed.is_valid(), "{:?}", parsed.errors);

        let campaign = parsed.campaign;
        assert_eq!(
            campaign.trigger,
            Some(Trigger::Event {
                event_type: "makes a purchase".to_string()
            })
        );
        assert_eq!(
            campaign.steps,
            vec![
                Step::Email {
                    template_id: "thank_you".to_string(),
                    custom_fields: vec![
                        CustomField {
                            key: "subject".to_string(),
                            value: "Thanks!".to_string()
                        },
                        CustomField {
                            key: "body".to_string(),
                            value: "We hope you enjoy it. Let us know how it goes.\nSee you soon."
                                .to_string()
                        },
                        CustomField {
                            key: "signature".to_string(),
                            value: "The team".to_string()
                        },
                    ],
                },
                Step::Wait {
                    wait_minutes: Some(4320)
                },
                Step::Condition {
                    predicate_id: "has_not_reviewed".to_string()
                },
                Step::Email {
                    template_id: "review_request".to_string(),
                    custom_fields: vec![],
                },
            ]
        );
    }

    #[test]
    fn duplicate_keys_are_kept() {
        let content = "when a user registers\nsend the welcome email\n    tag: one\n    tag: two";

        let parsed = parse(content);
        assert!(parsed.is_valid());

        match &parsed.campaign.steps[0] {
            Step::Email { custom_fields, .. } => {
                assert_eq!(custom_fields.len(), 2);
                assert_eq!(custom_fields[0].key, "tag");
                assert_eq!(custom_fields[1].key, "tag");
                assert_eq!(custom_fields[1].value, "two");
            }
            step => panic!("Expected an email step, got {:?}", step),
        }
    }

    #[test]
    fn tabs_count_as_indentation() {
        let content = "when a user registers\nsend the welcome email\n\tsubject: Hi\n\tbody:\n\t\tline one\n\t\tline two";

        let parsed = parse(content);
        assert!(parsed.is_valid());

        match &parsed.campaign.steps[0] {
            Step::Email { custom_fields, .. } => {
                assert_eq!(custom_fields[1].value, "line one line two");
            }
            step => panic!("Expected an email step, got {:?}", step),
        }
    }

    #[test]
    fn windows_line_endings() {
        let parsed = parse("when a user registers\r\nwait for 1 day\r\n");

        assert!(parsed.is_valid());
        assert_eq!(
            parsed.campaign.steps,
            vec![Step::Wait {
                wait_minutes: Some(1440)
            }]
        );
    }

    #[test]
    fn reparsing_is_stable() {
        let content = r#"
every Monday and Caturday at 9am
send the digest email
    body:
        one

        two
wait for 5 kittens
        "#;

        let first = parse(content);
        let second = parse(content);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
