use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    core::{
        error::{LoadError, MalformedRecord, MalformedRecordKind},
        id::IdType,
        Weight,
    },
    graph::Graph,
};

use super::Export;

/// Reader of the edge list format.
///
/// Every line holds one record `SOURCE,TARGET` or `SOURCE,TARGET,WEIGHT`,
/// which is added to the graph as an edge in the order of the lines. Missing
/// weight means `0`, otherwise it must be a signed decimal integer.
///
/// Trailing whitespace of a line is removed and lines that end up empty are
/// ignored. There is no header, no comments and no quoting, the fields are
/// taken as they are and converted to ids via [`FromStr`].
///
/// By default, the first malformed line aborts the whole load. In relaxed
/// mode, malformed lines are skipped with a warning.
///
/// # Examples
///
/// ```
/// use digraph::io::EdgeListReader;
///
/// let input = "FOOD,FOOT\nFOOD,GOOD,2\n\nFOOT,FOOD\n";
/// let graph = EdgeListReader::new().read::<String, _>(input.as_bytes()).unwrap();
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph["FOOD"].weight("GOOD"), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    delimiter: char,
    relaxed: bool,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            delimiter: ',',
            relaxed: false,
        }
    }
}

impl EdgeListReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter. Default is `,`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Skip malformed lines instead of failing. Default is `false`.
    pub fn relaxed(mut self, relaxed: bool) -> Self {
        self.relaxed = relaxed;
        self
    }

    pub fn read<I, R>(&self, reader: R) -> Result<Graph<I>, LoadError>
    where
        I: IdType + FromStr,
        R: BufRead,
    {
        let mut graph = Graph::new();
        let mut records = 0;
        let mut skipped = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let record = line.trim_end();

            if record.is_empty() {
                continue;
            }

            match self.parse_record(record, index + 1) {
                Ok((src, dst, weight)) => {
                    graph.add_edge(src, dst, weight);
                    records += 1;
                }
                Err(error) if self.relaxed => {
                    log::warn!("skipping {error}");
                    skipped += 1;
                }
                Err(error) => return Err(error.into()),
            }
        }

        log::debug!(
            "read {records} records ({skipped} skipped) into {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    pub fn read_file<I, P>(&self, path: P) -> Result<Graph<I>, LoadError>
    where
        I: IdType + FromStr,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        log::debug!("reading edge list from {}", path.display());

        let file = File::open(path)?;
        self.read(BufReader::new(file))
    }

    /// Parses a single non-empty record. `line` is the one-based line number
    /// reported in the error.
    pub fn parse_record<I: FromStr>(
        &self,
        record: &str,
        line: usize,
    ) -> Result<(I, I, Weight), MalformedRecord> {
        let malformed = |kind| MalformedRecord::new(line, kind);

        let fields = record.split(self.delimiter).collect::<Vec<_>>();
        let (src, dst, weight) = match fields.as_slice() {
            [src, dst] => (src, dst, None),
            [src, dst, weight] => (src, dst, Some(weight)),
            _ => return Err(malformed(MalformedRecordKind::FieldCount(fields.len()))),
        };

        let weight = match weight {
            Some(weight) => weight
                .parse::<Weight>()
                .map_err(|_| malformed(MalformedRecordKind::InvalidWeight))?,
            None => 0,
        };

        let src = src
            .parse()
            .map_err(|_| malformed(MalformedRecordKind::InvalidId))?;
        let dst = dst
            .parse()
            .map_err(|_| malformed(MalformedRecordKind::InvalidId))?;

        Ok((src, dst, weight))
    }
}

/// Writer of the edge list format understood by [`EdgeListReader`].
///
/// Edges are written in the order of [`Graph::edges_weighted`]. Reading the
/// output back gives a graph with the same vertices, edges and weights, with
/// the exception of vertices without any edges, which the format cannot
/// express.
///
/// Ids that contain the delimiter or a line break, or end with whitespace,
/// would not survive the reading and are rejected with
/// [`ErrorKind::InvalidInput`]. So is an empty target written without weight
/// after a whitespace delimiter.
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    delimiter: char,
    omit_zero_weights: bool,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            delimiter: ',',
            omit_zero_weights: true,
        }
    }
}

impl EdgeListWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write `SOURCE,TARGET` instead of `SOURCE,TARGET,0`. Default is `true`.
    pub fn omit_zero_weights(mut self, omit: bool) -> Self {
        self.omit_zero_weights = omit;
        self
    }

    pub fn to_string<I>(&self, graph: &Graph<I>) -> io::Result<String>
    where
        I: IdType + Display,
    {
        let mut buffer = Vec::new();
        self.export(graph, &mut buffer)?;

        String::from_utf8(buffer).map_err(|error| io::Error::new(ErrorKind::InvalidData, error))
    }

    pub fn write_file<I, P>(&self, graph: &Graph<I>, path: P) -> io::Result<()>
    where
        I: IdType + Display,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        log::debug!("writing edge list to {}", path.display());

        let mut out = BufWriter::new(File::create(path)?);
        self.export(graph, &mut out)?;
        out.flush()
    }

    fn format_id<I: Display>(&self, id: &I) -> io::Result<String> {
        let id = id.to_string();

        if id.contains(self.delimiter)
            || id.contains(['\n', '\r'])
            || id.ends_with(char::is_whitespace)
        {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("vertex id {id:?} cannot be represented in edge list"),
            ));
        }

        Ok(id)
    }
}

impl<I> Export<Graph<I>> for EdgeListWriter
where
    I: IdType + Display,
{
    fn export<W: Write>(&self, graph: &Graph<I>, out: &mut W) -> io::Result<()> {
        let delimiter = self.delimiter;

        for (src, dst, weight) in graph.edges_weighted() {
            let src = self.format_id(src)?;
            let dst = self.format_id(dst)?;

            if weight == 0 && self.omit_zero_weights {
                // The trailing delimiter would be stripped as whitespace.
                if dst.is_empty() && delimiter.is_whitespace() {
                    return Err(io::Error::new(
                        ErrorKind::InvalidInput,
                        format!("edge {src:?} -> \"\" cannot be represented in edge list"),
                    ));
                }

                writeln!(out, "{src}{delimiter}{dst}")?;
            } else {
                writeln!(out, "{src}{delimiter}{dst}{delimiter}{weight}")?;
            }
        }

        Ok(())
    }
}
