// Prompt constants for the closing-script generator.
// Reuses the shared system message from llm_client::prompts.

/// Closing-script prompt. Replace every `{placeholder}` before sending.
///
/// The line parser expects the pitch on the first line and one rebuttal per
/// following line, so the instructions ask for exactly that layout.
pub const CLOSING_SCRIPT_PROMPT_TEMPLATE: &str = r#"You are an experienced, compliance-minded Medicare Advantage sales agent.
Write a closing script for the client below.

Client:
- ZIP code: {zip}
- Date of birth: {dob}
- Medicaid: {medicaid}
- Low-Income Subsidy (LIS): {lis}
- Dual-eligible SNP (D-SNP): {dsnp}
- Chronic conditions: {chronic_conditions}
- Desired benefits: {desired_benefits}
- Selected plan ID: {plan_id}

Respond with:
1. A short pitch (2-3 sentences) on the first line explaining how this plan fits the client's needs.
2. Then three common objections, each with a one-sentence rebuttal, one per line.

Keep the tone warm, ethical and informative. Do not promise benefits the plan may not offer."#;
