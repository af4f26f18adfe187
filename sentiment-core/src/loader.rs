use {
    std::{fs, path::Path},
    tracing::{info, debug},
    csv::{ReaderBuilder, StringRecord},
    crate::{
        config::{InputConfig, ColumnsConfig},
        error::{AnalysisError, Result},
        headers::{HeaderMap, canonicalize_header},
    },
};

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub comment_column: String,
    pub platform_column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentRecord {
    values: Vec<String>,
    comment: String,
    platform: String,
}

#[derive(Debug)]
pub struct Dataset {
    headers: HeaderMap,
    records: Vec<CommentRecord>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment_column: "Comment".to_owned(),
            platform_column: "Platform".to_owned(),
        }
    }
}

impl LoadOptions {
    pub fn from_config(input: &InputConfig, columns: &ColumnsConfig) -> Self {
        Self {
            delimiter: input.delimiter(),
            comment_column: columns.comment().to_owned(),
            platform_column: columns.platform().to_owned(),
        }
    }
}

impl CommentRecord {
    pub fn new(comment: impl Into<String>, platform: impl Into<String>) -> Self {
        let comment = comment.into();
        let platform = platform.into();

        Self {
            values: vec![comment.clone(), platform.clone()],
            comment,
            platform,
        }
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    // Every column of the input row, in header order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Dataset {
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn records(&self) -> &[CommentRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CommentRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn load_comments(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    info!("loading comments from: {}", path.display());

    let bytes = fs::read(path).map_err(|source| AnalysisError::InputNotFound {
        path: path.to_owned(),
        source,
    })?;

    let dataset = parse_comments(&bytes, options)?;
    info!("loaded {} comments with {} columns", dataset.len(), dataset.headers().len());

    Ok(dataset)
}

pub fn parse_comments(bytes: &[u8], options: &LoadOptions) -> Result<Dataset> {
    let text = decode_latin1(bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = HeaderMap::from_raw(reader.headers()?.iter());
    let comment_index = required_column(&headers, &options.comment_column)?;
    let platform_index = required_column(&headers, &options.platform_column)?;
    debug!("comment column at {}, platform column at {}", comment_index, platform_index);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(into_comment_record(&row, comment_index, platform_index));
    }

    Ok(Dataset {
        headers,
        records,
    })
}

// Latin-1 maps every byte to the code point with the same value, so decoding cannot fail.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn required_column(headers: &HeaderMap, name: &str) -> Result<usize> {
    headers.position(name).ok_or_else(|| AnalysisError::MissingColumn {
        column: canonicalize_header(name),
    })
}

fn into_comment_record(row: &StringRecord, comment_index: usize, platform_index: usize) -> CommentRecord {
    CommentRecord {
        values: row.iter().map(|v| v.to_owned()).collect(),
        comment: row.get(comment_index).unwrap_or_default().to_owned(),
        platform: row.get(platform_index).unwrap_or_default().to_owned(),
    }
}
