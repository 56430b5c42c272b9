use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

/// A field AtomicParsley accepts on its command line when writing tags.
///
/// The variants form the closed vocabulary of writable fields; any key of a write request
/// that does not name one of them is dropped by filtering. Note that this set diverges from
/// the read-side atom codes: some fields that appear in dump output (derived store
/// identifiers like `itunesCountryId`) cannot be written at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WriteFlag {
    // Simple fields
    /// (`--advisory`)
    Advisory,
    /// (`--album`)
    Album,
    /// (`--albumArtist`)
    AlbumArtist,
    /// (`--artist`)
    Artist,
    /// (`--artwork`)
    Artwork,
    /// (`--bpm`)
    Bpm,
    /// (`--comment`)
    Comment,
    /// (`--compilation`)
    Compilation,
    /// (`--composer`)
    Composer,
    /// (`--contentRating`)
    ContentRating,
    /// (`--copyright`)
    Copyright,
    /// (`--description`)
    Description,
    /// (`--disk`)
    Disk,
    /// (`--encodedBy`)
    EncodedBy,
    /// (`--encodingTool`)
    EncodingTool,
    /// (`--gapless`)
    Gapless,
    /// (`--genre`)
    Genre,
    /// (`--grouping`)
    Grouping,
    /// (`--hdvideo`)
    HdVideo,
    /// (`--keyword`)
    Keyword,
    /// (`--longdesc`)
    LongDesc,
    /// (`--lyrics`)
    Lyrics,
    /// (`--lyricsFile`)
    LyricsFile,
    /// (`--purchaseDate`)
    PurchaseDate,
    /// (`--stik`)
    Stik,
    /// (`--storedesc`)
    StoreDesc,
    /// (`--title`)
    Title,
    /// (`--tracknum`)
    TrackNum,
    /// (`--year`)
    Year,

    // Podcast fields
    /// (`--category`)
    Category,
    /// (`--podcastGUID`)
    PodcastGuid,
    /// (`--podcastURL`)
    PodcastUrl,

    // TV show fields
    /// (`--TVEpisode`)
    TvEpisode,
    /// (`--TVEpisodeNum`)
    TvEpisodeNum,
    /// (`--TVNetwork`)
    TvNetwork,
    /// (`--TVSeasonNum`)
    TvSeasonNum,
    /// (`--TVShowName`)
    TvShowName,

    // Store identifiers
    /// (`--apID`)
    ApId,
    /// (`--cnID`)
    CnId,
    /// (`--geID`)
    GeId,
    /// (`--productFlag`)
    ProductFlag,
    /// (`--xID`)
    XId,
}

impl WriteFlag {
    /// Returns the write flag matching the flag name, or `None` if the name is outside the
    /// writable vocabulary. Names are case sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "advisory" => Some(Self::Advisory),
            "album" => Some(Self::Album),
            "albumArtist" => Some(Self::AlbumArtist),
            "apID" => Some(Self::ApId),
            "artist" => Some(Self::Artist),
            "artwork" => Some(Self::Artwork),
            "bpm" => Some(Self::Bpm),
            "category" => Some(Self::Category),
            "cnID" => Some(Self::CnId),
            "comment" => Some(Self::Comment),
            "compilation" => Some(Self::Compilation),
            "composer" => Some(Self::Composer),
            "contentRating" => Some(Self::ContentRating),
            "copyright" => Some(Self::Copyright),
            "description" => Some(Self::Description),
            "disk" => Some(Self::Disk),
            "encodedBy" => Some(Self::EncodedBy),
            "encodingTool" => Some(Self::EncodingTool),
            "gapless" => Some(Self::Gapless),
            "geID" => Some(Self::GeId),
            "genre" => Some(Self::Genre),
            "grouping" => Some(Self::Grouping),
            "hdvideo" => Some(Self::HdVideo),
            "keyword" => Some(Self::Keyword),
            "longdesc" => Some(Self::LongDesc),
            "lyrics" => Some(Self::Lyrics),
            "lyricsFile" => Some(Self::LyricsFile),
            "podcastGUID" => Some(Self::PodcastGuid),
            "podcastURL" => Some(Self::PodcastUrl),
            "productFlag" => Some(Self::ProductFlag),
            "purchaseDate" => Some(Self::PurchaseDate),
            "stik" => Some(Self::Stik),
            "storedesc" => Some(Self::StoreDesc),
            "title" => Some(Self::Title),
            "tracknum" => Some(Self::TrackNum),
            "TVEpisode" => Some(Self::TvEpisode),
            "TVEpisodeNum" => Some(Self::TvEpisodeNum),
            "TVNetwork" => Some(Self::TvNetwork),
            "TVSeasonNum" => Some(Self::TvSeasonNum),
            "TVShowName" => Some(Self::TvShowName),
            "xID" => Some(Self::XId),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    /// Returns the flag name as it appears on the command line, without the `--` prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Album => "album",
            Self::AlbumArtist => "albumArtist",
            Self::ApId => "apID",
            Self::Artist => "artist",
            Self::Artwork => "artwork",
            Self::Bpm => "bpm",
            Self::Category => "category",
            Self::CnId => "cnID",
            Self::Comment => "comment",
            Self::Compilation => "compilation",
            Self::Composer => "composer",
            Self::ContentRating => "contentRating",
            Self::Copyright => "copyright",
            Self::Description => "description",
            Self::Disk => "disk",
            Self::EncodedBy => "encodedBy",
            Self::EncodingTool => "encodingTool",
            Self::Gapless => "gapless",
            Self::GeId => "geID",
            Self::Genre => "genre",
            Self::Grouping => "grouping",
            Self::HdVideo => "hdvideo",
            Self::Keyword => "keyword",
            Self::LongDesc => "longdesc",
            Self::Lyrics => "lyrics",
            Self::LyricsFile => "lyricsFile",
            Self::PodcastGuid => "podcastGUID",
            Self::PodcastUrl => "podcastURL",
            Self::ProductFlag => "productFlag",
            Self::PurchaseDate => "purchaseDate",
            Self::Stik => "stik",
            Self::StoreDesc => "storedesc",
            Self::Title => "title",
            Self::TrackNum => "tracknum",
            Self::TvEpisode => "TVEpisode",
            Self::TvEpisodeNum => "TVEpisodeNum",
            Self::TvNetwork => "TVNetwork",
            Self::TvSeasonNum => "TVSeasonNum",
            Self::TvShowName => "TVShowName",
            Self::XId => "xID",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for WriteFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    /// Lazily initialized static reference to the table resolving atom codes, as they appear
    /// in dump output, to canonical tag names.
    static ref READ_ATOMS: HashMap<&'static str, &'static str> = read_atoms();
}

/// Returns the table resolving atom codes to canonical tag names.
#[rustfmt::skip]
fn read_atoms() -> HashMap<&'static str, &'static str> {
    let mut codes = HashMap::new();
    codes.insert("©alb", "album");
    codes.insert("©cmt", "comment");
    codes.insert("©con", "conductor");
    codes.insert("©day", "year");
    codes.insert("©dir", "director");
    codes.insert("©gen", "genre");
    codes.insert("©grp", "contentGroup");
    codes.insert("©lyr", "lyrics");
    codes.insert("©mvc", "movementTotal");
    codes.insert("©mvi", "movement");
    codes.insert("©mvn", "movementName");
    codes.insert("©nam", "title");
    codes.insert("©wrk", "work");
    codes.insert("©wrt", "composer");
    codes.insert("aART", "albumArtist");
    codes.insert("apID", "itunesAccount");
    codes.insert("atID", "itunesArtistId");
    codes.insert("catg", "podcastCategory");
    codes.insert("cmID", "itunesComposerId");
    codes.insert("cnID", "itunesCatalogId");
    codes.insert("cpil", "compilation");
    codes.insert("cprt", "copyright");
    codes.insert("desc", "description");
    codes.insert("disk", "disk");
    codes.insert("egid", "podcastId");
    codes.insert("geID", "itunesGenreId");
    codes.insert("gnre", "genre");
    codes.insert("hdvd", "itunesHdVideo");
    codes.insert("keyw", "podcastKeywords");
    codes.insert("ldes", "podcastDesc");
    codes.insert("ownr", "itunesOwner");
    codes.insert("pcst", "podcast");
    codes.insert("pgap", "itunesGapless");
    codes.insert("plID", "itunesAlbumId");
    codes.insert("purd", "itunesPurchaseDate");
    codes.insert("purl", "podcastUrl");
    codes.insert("rtng", "itunesAdvisory");
    codes.insert("sfID", "itunesCountryId");
    codes.insert("soar", "artistSort");
    codes.insert("soco", "composerSort");
    codes.insert("sonm", "titleSort");
    codes.insert("sosn", "tvShowSort");
    codes.insert("stik", "itunesMediaType");
    codes.insert("tmpo", "bpm");
    codes.insert("trkn", "tracknum");
    codes.insert("tven", "tvEpisodeId");
    codes.insert("tves", "tvEpisode");
    codes.insert("tvnn", "tvNetwork");
    codes.insert("tvsh", "tvShow");
    codes.insert("tvsn", "tvSeason");
    codes.insert("xID", "xID");
    codes
}

/// Resolves a 4 character packed atom code to its canonical tag name for reading.
///
/// Unmapped codes resolve to `None` and are silently skipped by the parser, since the tool
/// emits many informational lines that are not tag data.
pub fn resolve_read_atom(code: &str) -> Option<&'static str> {
    READ_ATOMS.get(code).copied()
}
