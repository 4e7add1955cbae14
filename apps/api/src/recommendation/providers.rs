/// Course providers for well-known skills. Anything not listed here is
/// covered by the in-house program.
const SKILL_PROVIDERS: &[(&str, &str)] = &[
    ("Leadership", "Harvard ManageMentor"),
    ("Communication", "LinkedIn Learning"),
    ("Project Management", "PMI Academy"),
    ("Strategic Thinking", "Wharton Online"),
    ("Data Analysis", "Coursera"),
    ("Python", "Coursera"),
    ("JavaScript", "Frontend Masters"),
    ("Cloud Computing", "AWS Training"),
    ("Machine Learning", "DeepLearning.AI"),
    ("Technical Skills", "Pluralsight"),
    ("Negotiation", "Harvard Program on Negotiation"),
    ("Financial Acumen", "edX"),
];

pub const DEFAULT_PROVIDER: &str = "Internal Training Program";

/// Returns the course provider for `skill`, exact match on the skill name.
pub fn provider_for(skill: &str) -> &'static str {
    SKILL_PROVIDERS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, provider)| *provider)
        .unwrap_or(DEFAULT_PROVIDER)
}
