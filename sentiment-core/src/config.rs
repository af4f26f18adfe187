use {
    std::{fs::read_to_string, path::PathBuf},
    tracing::warn,
    serde::Deserialize,
};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub columns: ColumnsConfig,
    pub charts: Option<ChartsConfig>,
    #[serde(default)]
    pub scorer: ScorerConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct InputConfig {
    path: Option<PathBuf>,
    delimiter: Option<char>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ColumnsConfig {
    comment: Option<String>,
    platform: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ChartsConfig {
    pub enabled: bool,
    output_dir: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ScorerConfig {
    lexicon_path: Option<PathBuf>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: None,
            delimiter: None,
        }
    }
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            comment: None,
            platform: None,
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::parse(&v))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Config = toml::from_str(content).map_err(|err| err.to_string())?;
        if let Some(delimiter) = config.input.delimiter.filter(|v| !v.is_ascii()) {
            return Err(format!("input delimiter must be a single ascii character, got: {:?}", delimiter));
        }
        Ok(config)
    }

    pub fn charts(&self) -> ChartsConfig {
        self.charts.as_ref().cloned().unwrap_or_default()
    }
}

impl InputConfig {
    pub fn path(&self) -> PathBuf {
        self.path.as_ref().cloned().unwrap_or_else(|| PathBuf::from("comments.csv"))
    }

    pub fn delimiter(&self) -> u8 {
        // validated to be ascii in Config::parse
        self.delimiter.map(|v| v as u8).unwrap_or(b',')
    }
}

impl ColumnsConfig {
    pub fn comment(&self) -> &str {
        self.comment.as_deref().unwrap_or("Comment")
    }

    pub fn platform(&self) -> &str {
        self.platform.as_deref().unwrap_or("Platform")
    }
}

impl ChartsConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.as_ref().cloned().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl ScorerConfig {
    pub fn lexicon_path(&self) -> Option<&PathBuf> {
        self.lexicon_path.as_ref()
    }
}
