//! A single `<onlinemapsource>` definition and its XML rendering

/// Fields of an OruxMaps online map source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDefinition {
    pub name: String,
    /// Tile URL template, written inside CDATA
    pub url: String,
    /// Website link markup, written inside CDATA
    pub website: String,
    pub min_zoom: i64,
    pub max_zoom: i64,
    pub projection: String,
    pub servers: String,
    /// Name attribute of the `<httpparam>` element
    pub http_param: String,
    pub cacheable: bool,
    pub downloadable: bool,
    pub max_tiles_day: i64,
    pub max_threads: i64,
    pub xop: String,
    pub yop: String,
    pub zop: String,
    pub qop: String,
    pub sop: String,
}

impl SourceDefinition {
    /// Parse a definition from the named table of a TOML document
    pub fn from_str(content: &str, table_name: &str) -> Result<Self, String> {
        let document: toml::Table = content
            .parse()
            .map_err(|e| format!("Failed to parse TOML: {}", e))?;

        let table = document
            .get(table_name)
            .and_then(|v| v.as_table())
            .ok_or_else(|| format!("Missing [{}] table", table_name))?;

        Ok(SourceDefinition {
            name: get_str(table, "name")?,
            url: get_str(table, "url")?,
            website: get_str(table, "website")?,
            min_zoom: get_int(table, "minzoom")?,
            max_zoom: get_int(table, "maxzoom")?,
            projection: get_str(table, "projection")?,
            servers: get_str(table, "servers")?,
            http_param: get_str(table, "httpparam")?,
            cacheable: get_bool(table, "cacheable")?,
            downloadable: get_bool(table, "downloadable")?,
            max_tiles_day: get_int(table, "maxtilesday")?,
            max_threads: get_int(table, "maxthreads")?,
            xop: get_str(table, "xop")?,
            yop: get_str(table, "yop")?,
            zop: get_str(table, "zop")?,
            qop: get_str(table, "qop")?,
            sop: get_str(table, "sop")?,
        })
    }

    /// Render the `<onlinemapsource>` element for `uid`
    ///
    /// The element is preceded by an empty line and every line, the last
    /// one included, ends with `\n`.
    pub fn render(&self, uid: u64) -> String {
        format!(
            "\n\
             <onlinemapsource uid=\"{uid}\">\n\
             <name>{name}</name>\n\
             <url><![CDATA[{url}]]></url>\n\
             <website><![CDATA[{website}]]></website>\n\
             <minzoom>{min_zoom}</minzoom>\n\
             <maxzoom>{max_zoom}</maxzoom>\n\
             <projection>{projection}</projection>\n\
             <servers>{servers}</servers>\n\
             <httpparam name=\"{http_param}\"></httpparam>\n\
             <cacheable>{cacheable}</cacheable>\n\
             <downloadable>{downloadable}</downloadable>\n\
             <maxtilesday>{max_tiles_day}</maxtilesday>\n\
             <maxthreads>{max_threads}</maxthreads>\n\
             <xop>{xop}</xop>\n\
             <yop>{yop}</yop>\n\
             <zop>{zop}</zop>\n\
             <qop>{qop}</qop>\n\
             <sop>{sop}</sop>\n\
             </onlinemapsource>\n",
            uid = uid,
            name = self.name,
            url = self.url,
            website = self.website,
            min_zoom = self.min_zoom,
            max_zoom = self.max_zoom,
            projection = self.projection,
            servers = self.servers,
            http_param = self.http_param,
            cacheable = u8::from(self.cacheable),
            downloadable = u8::from(self.downloadable),
            max_tiles_day = self.max_tiles_day,
            max_threads = self.max_threads,
            xop = self.xop,
            yop = self.yop,
            zop = self.zop,
            qop = self.qop,
            sop = self.sop,
        )
    }
}

fn get_str(table: &toml::Table, key: &str) -> Result<String, String> {
    table
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| format!("Missing string field '{}'", key))
}

fn get_int(table: &toml::Table, key: &str) -> Result<i64, String> {
    table
        .get(key)
        .and_then(|v| v.as_integer())
        .ok_or_else(|| format!("Missing integer field '{}'", key))
}

fn get_bool(table: &toml::Table, key: &str) -> Result<bool, String> {
    table
        .get(key)
        .and_then(|v| v.as_bool())
        .ok_or_else(|| format!("Missing boolean field '{}'", key))
}
