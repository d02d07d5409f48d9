//! New York county FIPS codes.
//!
//! Source: the census county list for New York state. The 2024 LAR publishes
//! `county_code` as a five-digit state+county FIPS string.

use crate::codelist::{Codelist, Label};

pub const COUNTY_CODE: Codelist = Codelist {
    column: "county_code",
    entries: &[
        ("36001", Label::Text("Albany")),
        ("36003", Label::Text("Allegany")),
        ("36005", Label::Text("Bronx")),
        ("36007", Label::Text("Broome")),
        ("36009", Label::Text("Cattaraugus")),
        ("36011", Label::Text("Cayuga")),
        ("36013", Label::Text("Chautauqua")),
        ("36015", Label::Text("Chemung")),
        ("36017", Label::Text("Chenango")),
        ("36019", Label::Text("Clinton")),
        ("36021", Label::Text("Columbia")),
        ("36023", Label::Text("Cortland")),
        ("36025", Label::Text("Delaware")),
        ("36027", Label::Text("Dutchess")),
        ("36029", Label::Text("Erie")),
        ("36031", Label::Text("Essex")),
        ("36033", Label::Text("Franklin")),
        ("36035", Label::Text("Fulton")),
        ("36037", Label::Text("Genesee")),
        ("36039", Label::Text("Greene")),
        ("36041", Label::Text("Hamilton")),
        ("36043", Label::Text("Herkimer")),
        ("36045", Label::Text("Jefferson")),
        ("36047", Label::Text("Kings")),
        ("36049", Label::Text("Lewis")),
        ("36051", Label::Text("Livingston")),
        ("36053", Label::Text("Madison")),
        ("36055", Label::Text("Monroe")),
        ("36057", Label::Text("Montgomery")),
        ("36059", Label::Text("Nassau")),
        ("36061", Label::Text("New_York")),
        ("36063", Label::Text("Niagara")),
        ("36065", Label::Text("Oneida")),
        ("36067", Label::Text("Onondaga")),
        ("36069", Label::Text("Ontario")),
        ("36071", Label::Text("Orange")),
        ("36073", Label::Text("Orleans")),
        ("36075", Label::Text("Oswego")),
        ("36077", Label::Text("Otsego")),
        ("36079", Label::Text("Putnam")),
        ("36081", Label::Text("Queens")),
        ("36083", Label::Text("Rensselaer")),
        ("36085", Label::Text("Richmond")),
        ("36087", Label::Text("Rockland")),
        ("36089", Label::Text("St_Lawrence")),
        ("36091", Label::Text("Saratoga")),
        ("36093", Label::Text("Schenectady")),
        ("36095", Label::Text("Schoharie")),
        ("36097", Label::Text("Schuyler")),
        ("36099", Label::Text("Seneca")),
        ("36101", Label::Text("Steuben")),
        ("36103", Label::Text("Suffolk")),
        ("36105", Label::Text("Sullivan")),
        ("36107", Label::Text("Tioga")),
        ("36109", Label::Text("Tompkins")),
        ("36111", Label::Text("Ulster")),
        ("36113", Label::Text("Warren")),
        ("36115", Label::Text("Washington")),
        ("36117", Label::Text("Wayne")),
        ("36119", Label::Text("Westchester")),
        ("36121", Label::Text("Wyoming")),
        ("36123", Label::Text("Yates")),
    ],
};
