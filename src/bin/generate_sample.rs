use anyhow::{Context, Result};
use serde::Serialize;

/// One row of the sample dataset.
///
/// The header spellings are deliberately not the canonical schema: the app
/// has to normalize them ("Popular Attractions" → popular_attractions,
/// "Lng" → longitude), so the sample doubles as a smoke test for the
/// header matching.
#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Destination")]
    name: &'static str,
    #[serde(rename = "State")]
    state: &'static str,
    #[serde(rename = "About")]
    description: &'static str,
    #[serde(rename = "Popular Attractions")]
    attractions: &'static str,
    #[serde(rename = "Image URL")]
    image_url: &'static str,
    #[serde(rename = "Lat")]
    latitude: Option<f64>,
    #[serde(rename = "Lng")]
    longitude: Option<f64>,
}

fn sample_rows() -> Vec<SampleRow> {
    vec![
        SampleRow {
            name: "Taj Mahal",
            state: "Uttar Pradesh",
            description: "Ivory-white marble mausoleum on the bank of the Yamuna, \
                          built by Shah Jahan in memory of Mumtaz Mahal.",
            attractions: "Main mausoleum, Mehtab Bagh, Agra Fort",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/d/da/Taj-Mahal.jpg",
            latitude: Some(27.1751),
            longitude: Some(78.0421),
        },
        SampleRow {
            name: "Jaipur",
            state: "Rajasthan",
            description: "The Pink City: bazaars, forts and palaces of the old \
                          Kachwaha capital.",
            attractions: "Hawa Mahal, Amber Fort, City Palace, Jantar Mantar",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/2/2d/Hawa_Mahal_2011.jpg",
            latitude: Some(26.9124),
            longitude: Some(75.7873),
        },
        SampleRow {
            name: "Udaipur",
            state: "Rajasthan",
            description: "City of Lakes, ringed by the Aravalli hills.",
            attractions: "City Palace, Lake Pichola, Jag Mandir, Monsoon Palace",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/a/ae/Udaipur_City_Palace.jpg",
            latitude: Some(24.5854),
            longitude: Some(73.7125),
        },
        SampleRow {
            name: "Goa",
            state: "Goa",
            description: "Beaches, Portuguese-era churches and seafood on the \
                          Konkan coast.",
            attractions: "Baga Beach, Basilica of Bom Jesus, Fort Aguada, Dudhsagar Falls",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/8/85/Palolem_beach.jpg",
            latitude: Some(15.2993),
            longitude: Some(74.1240),
        },
        SampleRow {
            name: "Varanasi",
            state: "Uttar Pradesh",
            description: "One of the world's oldest living cities, on the ghats \
                          of the Ganges.",
            attractions: "Dashashwamedh Ghat, Kashi Vishwanath Temple, Sarnath",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/0/04/Varanasi_ghats.jpg",
            latitude: Some(25.3176),
            longitude: Some(82.9739),
        },
        SampleRow {
            name: "Hampi",
            state: "Karnataka",
            description: "Boulder-strewn ruins of the Vijayanagara empire.",
            attractions: "Virupaksha Temple, Vittala Temple, Matanga Hill",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/a/a6/Hampi_virupaksha_temple.jpg",
            latitude: Some(15.3350),
            longitude: Some(76.4600),
        },
        SampleRow {
            name: "Mysore",
            state: "Karnataka",
            description: "Palace city of the Wodeyars, famous for its Dasara \
                          festival and sandalwood.",
            attractions: "Mysore Palace, Chamundi Hills, Brindavan Gardens",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/b/bb/Mysore_Palace_Morning.jpg",
            latitude: Some(12.2958),
            longitude: Some(76.6394),
        },
        SampleRow {
            name: "Alleppey",
            state: "Kerala",
            description: "Houseboat gateway to the Kerala backwaters.",
            attractions: "Houseboat cruise, Alappuzha Beach, Kumarakom",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/e/e6/Kerala_backwaters.jpg",
            latitude: Some(9.4981),
            longitude: Some(76.3388),
        },
        SampleRow {
            name: "Munnar",
            state: "Kerala",
            description: "Rolling tea gardens in the Western Ghats.",
            attractions: "Tea Museum, Eravikulam National Park, Top Station",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/4/4d/Munnar_hillstation.jpg",
            latitude: Some(10.0889),
            longitude: Some(77.0595),
        },
        SampleRow {
            name: "Darjeeling",
            state: "West Bengal",
            description: "Himalayan hill town with views of Kangchenjunga.",
            attractions: "Tiger Hill, Batasia Loop, Darjeeling Himalayan Railway",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/1/16/Darjeeling_town.jpg",
            latitude: Some(27.0360),
            longitude: Some(88.2627),
        },
        SampleRow {
            name: "Leh",
            state: "Ladakh",
            description: "High-altitude desert town between the Himalaya and \
                          Karakoram ranges.",
            attractions: "Pangong Lake, Nubra Valley, Thiksey Monastery",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/6/6b/Leh_Ladakh_city.jpg",
            latitude: Some(34.1526),
            longitude: Some(77.5771),
        },
        SampleRow {
            name: "Rishikesh",
            state: "Uttarakhand",
            description: "Yoga town where the Ganges leaves the Himalaya.",
            attractions: "Laxman Jhula, Triveni Ghat, white-water rafting",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/9/9f/Rishikesh_bridge.jpg",
            latitude: Some(30.0869),
            longitude: Some(78.2676),
        },
        SampleRow {
            name: "Amritsar",
            state: "Punjab",
            description: "Holiest city of Sikhism, home of the Harmandir Sahib.",
            attractions: "Golden Temple, Jallianwala Bagh, Wagah Border ceremony",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/d/dd/Golden_Temple_Amritsar.jpg",
            latitude: Some(31.6340),
            longitude: Some(74.8723),
        },
        SampleRow {
            name: "Khajuraho",
            state: "Madhya Pradesh",
            description: "Chandela-era temples renowned for their sculpture.",
            attractions: "Western Group of Temples, Kandariya Mahadeva Temple",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/a/a0/Khajuraho_temple.jpg",
            latitude: Some(24.8318),
            longitude: Some(79.9199),
        },
        SampleRow {
            name: "Konark",
            state: "Odisha",
            description: "The thirteenth-century Sun Temple, carved as a giant \
                          stone chariot.",
            attractions: "Sun Temple, Chandrabhaga Beach",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/4/47/Konark_Sun_Temple.jpg",
            latitude: Some(19.8876),
            longitude: Some(86.0945),
        },
        // No photo: the card list falls back to its textual placeholder.
        SampleRow {
            name: "Kaziranga",
            state: "Assam",
            description: "Grassland national park sheltering most of the world's \
                          one-horned rhinoceros.",
            attractions: "Jeep safari, Elephant safari, Brahmaputra viewpoints",
            image_url: "",
            latitude: Some(26.5775),
            longitude: Some(93.1711),
        },
        // No fixed point: the delta spans thousands of square kilometres, so
        // the row ships without coordinates and never becomes a marker.
        SampleRow {
            name: "Sundarbans",
            state: "West Bengal",
            description: "Mangrove delta of the Ganges, habitat of the Bengal \
                          tiger.",
            attractions: "Boat safari, Sajnekhali Watch Tower, Dobanki canopy walk",
            image_url: "https://upload.wikimedia.org/wikipedia/commons/2/29/Sundarbans_mangroves.jpg",
            latitude: None,
            longitude: None,
        },
    ]
}

fn main() -> Result<()> {
    let output_path = "destinations.csv";

    let rows = sample_rows();
    let mut writer =
        csv::Writer::from_path(output_path).with_context(|| format!("creating {output_path}"))?;
    for row in &rows {
        writer
            .serialize(row)
            .with_context(|| format!("writing row for {}", row.name))?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} destinations to {output_path}", rows.len());
    Ok(())
}
