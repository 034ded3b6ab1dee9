//! In-memory Tantivy index over provider names.

use std::collections::HashSet;

use tantivy::collector::TopDocs;
use tantivy::query::{BooleanQuery, BoostQuery, Occur, Query, TermQuery};
use tantivy::schema::{
    Field, IndexRecordOption, STORED, Schema, TextFieldIndexing, TextOptions, Value,
};
use tantivy::tokenizer::TokenStream;
use tantivy::{
    Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument, TantivyError, Term, doc,
};
use tracing::debug;

use crate::error::Result;
use crate::record::{Record, RecordId};

/// Tokenizer registered by default in Tantivy: lowercasing plus English stemming.
const NAME_TOKENIZER: &str = "en_stem";

/// Writer arena size. Tantivy requires at least 15MB per indexing thread.
const WRITER_HEAP_BYTES: usize = 15_000_000;

/// Full-text index over the `providername` field.
///
/// Documents store only the record id; callers resolve ids back to records.
/// The id is stored, not indexed, so only names are searchable.
pub struct SearchIndex {
    index: Index,
    reader: IndexReader,
    id_field: Field,
    name_field: Field,
    name_boost: f32,
    num_docs: usize,
}

impl SearchIndex {
    /// Build a fresh index from the full record set.
    pub fn build<'a>(
        records: impl IntoIterator<Item = &'a Record>,
        name_boost: f32,
    ) -> Result<Self> {
        let mut builder = Schema::builder();
        let id_field = builder.add_text_field("id", STORED);
        let name_options = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(NAME_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );
        let name_field = builder.add_text_field("providername", name_options);
        let index = Index::create_in_ram(builder.build());

        let mut writer: IndexWriter = index.writer_with_num_threads(1, WRITER_HEAP_BYTES)?;
        let mut num_docs = 0usize;
        for record in records {
            let name = record.name().unwrap_or_default();
            writer.add_document(doc!(
                id_field => record.id().as_str(),
                name_field => name,
            ))?;
            num_docs += 1;
        }
        writer.commit()?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        debug!(target: "search", documents = num_docs, boost = name_boost, "search index built");

        Ok(Self {
            index,
            reader,
            id_field,
            name_field,
            name_boost,
            num_docs,
        })
    }

    /// Ids of records whose name shares a term with `term`, best match first.
    ///
    /// The term is analysed with the name tokenizer and never parsed as
    /// query syntax: field prefixes, operators and wildcards are plain text.
    pub fn search(&self, term: &str) -> Result<Vec<RecordId>> {
        if self.num_docs == 0 {
            return Ok(Vec::new());
        }
        let Some(query) = self.name_query(term)? else {
            return Ok(Vec::new());
        };

        let searcher = self.reader.searcher();
        let top_docs = searcher.search(&query, &TopDocs::with_limit(self.num_docs))?;

        let mut ids = Vec::with_capacity(top_docs.len());
        for (_score, address) in top_docs {
            let doc: TantivyDocument = searcher.doc(address)?;
            if let Some(id) = doc.get_first(self.id_field).and_then(|v| v.as_str()) {
                ids.push(RecordId::from(id));
            }
        }

        debug!(target: "search", term, hits = ids.len(), "search complete");
        Ok(ids)
    }

    /// Any-of query over the analysed name terms; `None` when `term` has none.
    fn name_query(&self, term: &str) -> Result<Option<BoostQuery>> {
        let mut analyzer = self.index.tokenizers().get(NAME_TOKENIZER).ok_or_else(|| {
            TantivyError::InvalidArgument(format!("tokenizer {NAME_TOKENIZER} not registered"))
        })?;

        let mut seen = HashSet::new();
        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
        let mut stream = analyzer.token_stream(term);
        while stream.advance() {
            let text = stream.token().text.clone();
            if seen.insert(text.clone()) {
                let name_term = Term::from_field_text(self.name_field, &text);
                clauses.push((
                    Occur::Should,
                    Box::new(TermQuery::new(name_term, IndexRecordOption::WithFreqs)),
                ));
            }
        }

        if clauses.is_empty() {
            return Ok(None);
        }
        Ok(Some(BoostQuery::new(
            Box::new(BooleanQuery::new(clauses)),
            self.name_boost,
        )))
    }

    #[must_use]
    pub const fn num_docs(&self) -> usize {
        self.num_docs
    }
}
