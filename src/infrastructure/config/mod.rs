//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::application::services::ResponseResolver;
use crate::domain::entities::{PatternRule, ResponsePool, StudyPlan, StudyPlanCatalog, ToolCatalog};

/// Bot configuration. Omitted sections fall back to the built-in defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub bot: BotConfig,
    pub assistant: AssistantConfig,
    pub storage: StorageConfig,
    pub study_plans: BTreeMap<String, StudyPlan>,
    pub tools: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

/// AI demo content: ordered rules plus the fallback pool
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AssistantConfig {
    pub rules: Vec<RuleConfig>,
    pub fallback: Vec<String>,
    pub thinking_delay_ms: u64,
    pub reveal_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuleConfig {
    pub pattern: String,
    pub response: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "examai-bot".to_string(),
            prefix: "/".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("examai-prefs.json"),
        }
    }
}

fn default_thinking_delay() -> u64 {
    800
}

fn default_reveal_delay() -> u64 {
    30
}

const EXAM_RESPONSES: [&str; 6] = [
    "Based on exam analysis, I recommend focusing on current affairs from the last 6 months for better results.",
    "For quantitative aptitude, practice at least 20 questions daily and focus on time management techniques.",
    "Your weak areas appear to be in reasoning. I suggest daily practice of logical puzzles and patterns.",
    "For essay writing, structure your answers with clear introduction, body, and conclusion within time limits.",
    "General knowledge requires consistent reading. Follow reliable news sources and make monthly revision notes.",
    "Mock tests are crucial - take at least 2 per week and analyze your performance patterns carefully.",
];

impl Default for AssistantConfig {
    fn default() -> Self {
        let rule = |pattern: &str, response: &str| RuleConfig {
            pattern: pattern.to_string(),
            response: response.to_string(),
        };

        Self {
            rules: vec![
                rule("study plan|preparation|strategy", EXAM_RESPONSES[0]),
                rule("math|quantitative|aptitude|calculation", EXAM_RESPONSES[1]),
                rule("reasoning|logic|puzzle", EXAM_RESPONSES[2]),
                rule("writing|essay|answer", EXAM_RESPONSES[3]),
                rule("knowledge|gk|current affairs", EXAM_RESPONSES[4]),
                rule("test|mock|practice|exam", EXAM_RESPONSES[5]),
                rule(
                    "ssc|upsc|banking|government",
                    "Government exams require consistent preparation and understanding of exam patterns. Focus on your weak areas first.",
                ),
                rule(
                    "time|management|speed",
                    "Time management is crucial. Practice with timers and develop shortcuts for common question types.",
                ),
            ],
            fallback: EXAM_RESPONSES.iter().map(|s| s.to_string()).collect(),
            thinking_delay_ms: default_thinking_delay(),
            reveal_delay_ms: default_reveal_delay(),
        }
    }
}

impl AssistantConfig {
    /// Compile the rule table and pool, keeping rule order
    pub fn build_resolver(&self) -> Result<ResponseResolver, ConfigError> {
        let rules = self.rules
            .iter()
            .map(|r| PatternRule::new(&r.pattern, r.response.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let pool = ResponsePool::new(self.fallback.clone())?;
        Ok(ResponseResolver::new(rules, pool))
    }
}

fn default_study_plans() -> BTreeMap<String, StudyPlan> {
    let mut plans = BTreeMap::new();
    plans.insert("ssc".to_string(), StudyPlan::new("SSC Study Plan - 6 Months", &[
        "Month 1-2: Quantitative Aptitude fundamentals",
        "Month 3-4: Reasoning and General Intelligence",
        "Month 5: General Knowledge and Current Affairs",
        "Month 6: English Language and Mock Tests",
    ]));
    plans.insert("upsc".to_string(), StudyPlan::new("UPSC Study Plan - 12 Months", &[
        "Month 1-3: History, Geography, and Polity basics",
        "Month 4-6: Economy, Science & Technology",
        "Month 7-9: Current Affairs and Ethics",
        "Month 10-12: Answer Writing and Mock Tests",
    ]));
    plans.insert("banking".to_string(), StudyPlan::new("Banking Exam Plan - 4 Months", &[
        "Month 1: Quantitative Aptitude and Data Interpretation",
        "Month 2: Reasoning Ability and Computer Awareness",
        "Month 3: English Language and Banking Awareness",
        "Month 4: Current Affairs and Mock Tests",
    ]));
    plans
}

fn default_tools() -> BTreeMap<String, String> {
    [
        ("analyzer", "Performance Analyzer will help you identify your strengths and weaknesses!"),
        ("generator", "Question Generator will create custom practice questions for you!"),
        ("tutor", "AI Study Assistant is ready to answer your questions 24/7!"),
        ("predictor", "Score Predictor will estimate your exam performance based on practice tests!"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            assistant: AssistantConfig::default(),
            storage: StorageConfig::default(),
            study_plans: default_study_plans(),
            tools: default_tools(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject content that would break the assistant at startup
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.is_empty() {
            return Err(ConfigError::InvalidValue("bot.prefix must not be empty".to_string()));
        }
        self.assistant.build_resolver().map(|_| ())
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            if !prefix.is_empty() {
                config.bot.prefix = prefix;
            }
        }

        if let Ok(path) = std::env::var("EXAMAI_STORE") {
            config.storage.path = PathBuf::from(path);
        }

        config
    }

    pub fn study_plan_catalog(&self) -> StudyPlanCatalog {
        self.study_plans.clone().into_iter().collect()
    }

    pub fn tool_catalog(&self) -> ToolCatalog {
        self.tools.clone().into_iter().collect()
    }
}
