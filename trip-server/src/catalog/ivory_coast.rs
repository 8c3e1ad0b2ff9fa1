//! Built-in Ivory Coast dataset.
//!
//! Abidjan is the base city. Venue positions are given as small offsets
//! from the city centre, which is all proximity-first selection needs.

use crate::domain::ActivityKind::*;
use crate::domain::BudgetTier::*;
use crate::domain::MealSlot::*;
use crate::domain::TimeOfDay::*;
use crate::domain::{
    Activity, ActivityKind, Availability, BudgetTier, City, CityCategory, CityId, CostModel, Flight,
    GeoPoint, Hotel, MealSlot, Restaurant, TimeOfDay, TransportMode, TransportOption,
    TransportScope, hours,
};

use super::{Catalog, CatalogBuilder, CatalogError, RouteTableBuilder, TravelTimesBuilder};

type Offset = (f64, f64);
type ActivityRow = (&'static str, ActivityKind, BudgetTier, f64, TimeOfDay, f64, Offset);
type RestaurantRow = (&'static str, &'static str, BudgetTier, f64, MealSlot, Offset);
type HotelRow = (&'static str, BudgetTier, f64, Offset);

struct CitySeed {
    id: &'static str,
    name: &'static str,
    center: GeoPoint,
    category: CityCategory,
    has_airport: bool,
    nightlife: bool,
    activities: &'static [ActivityRow],
    restaurants: &'static [RestaurantRow],
    hotels: &'static [HotelRow],
}

const BASE_CITY: &str = "abidjan";

const CITIES: &[CitySeed] = &[
    CitySeed {
        id: "abidjan",
        name: "Abidjan",
        center: GeoPoint::new(5.3453, -4.0244),
        category: CityCategory::Capital,
        has_airport: true,
        nightlife: true,
        activities: &[
            ("Musée des Civilisations", Culture, Budget, 5.0, Morning, 2.0, (0.0120, 0.0010)),
            ("Plateau Walking Tour", Exploration, Budget, 8.0, Morning, 2.0, (0.0100, 0.0030)),
            ("Cathédrale Saint-Paul", Culture, MidRange, 15.0, Morning, 1.5, (0.0150, 0.0020)),
            ("Banco Forest Guided Hike", Exploration, MidRange, 45.0, Morning, 3.0, (0.0500, -0.0400)),
            ("Private Art Gallery Tour", Culture, Luxury, 120.0, Morning, 2.5, (0.0200, 0.0300)),
            ("Ebrié Lagoon Private Cruise", Exploration, Luxury, 180.0, Morning, 3.0, (-0.0050, 0.0100)),
            ("Treichville Market", Exploration, Budget, 5.0, Afternoon, 2.0, (-0.0100, 0.0050)),
            ("Banco Nature Walk", Exploration, Budget, 10.0, Afternoon, 2.5, (0.0480, -0.0420)),
            ("Cocody Craft Village", Culture, MidRange, 35.0, Afternoon, 2.0, (0.0180, 0.0350)),
            ("Abidjan Zoo", Exploration, MidRange, 25.0, Afternoon, 2.0, (0.0400, 0.0050)),
            ("Riviera Golf Session", Exploration, Luxury, 150.0, Afternoon, 3.0, (0.0100, 0.0800)),
            ("Spa Afternoon in Cocody", Exploration, Luxury, 130.0, Afternoon, 2.5, (0.0150, 0.0250)),
            ("Rue Princesse Live Music", Nightlife, Budget, 15.0, Evening, 2.5, (0.0300, -0.0300)),
            ("Zone 4 Bar Crawl", Nightlife, MidRange, 60.0, Evening, 3.0, (-0.0150, 0.0300)),
            ("Plateau Rooftop Lounge", Nightlife, Luxury, 140.0, Evening, 3.0, (0.0110, 0.0020)),
        ],
        restaurants: &[
            ("Maquis du Plateau", "Ivorian", Budget, 10.0, Lunch, (0.0110, 0.0020)),
            ("Allocodrome de Cocody", "Street food", Budget, 8.0, Dinner, (0.0200, 0.0320)),
            ("Le Bushman Café", "Fusion", MidRange, 35.0, Lunch, (0.0250, 0.0500)),
            ("La Taverne Ivoirienne", "Ivorian", MidRange, 30.0, Dinner, (-0.0120, 0.0280)),
            ("La Terrasse du Lagon", "French", Luxury, 90.0, Lunch, (0.0050, 0.0080)),
            ("Chez Georges", "Seafood", Luxury, 100.0, Dinner, (-0.0140, 0.0320)),
            ("Café de la Gare", "Pastries", Budget, 6.0, Breakfast, (0.0090, 0.0010)),
        ],
        hotels: &[
            ("Hôtel Ibis Plateau", Budget, 40.0, (0.0100, 0.0000)),
            ("Novotel Abidjan", MidRange, 95.0, (0.0120, 0.0030)),
            ("Sofitel Abidjan Hôtel Ivoire", Luxury, 280.0, (0.0200, 0.0280)),
        ],
    },
    CitySeed {
        id: "grand-bassam",
        name: "Grand-Bassam",
        center: GeoPoint::new(5.2010, -3.7380),
        category: CityCategory::Coastal,
        has_airport: false,
        nightlife: true,
        activities: &[
            ("Quartier France Heritage Walk", Culture, Budget, 5.0, Morning, 2.0, (0.0000, 0.0000)),
            ("Bassam Beach Morning", Beach, Budget, 3.0, Morning, 2.0, (-0.0060, 0.0040)),
            ("National Costume Museum", Culture, MidRange, 20.0, Morning, 1.5, (0.0010, 0.0020)),
            ("Bassam Surf Lesson", Beach, MidRange, 50.0, Morning, 2.0, (-0.0070, 0.0100)),
            ("Private Colonial Heritage Tour", Culture, Luxury, 110.0, Morning, 2.5, (0.0020, -0.0010)),
            ("Beach Cabana Day Pass", Beach, Luxury, 100.0, Morning, 3.0, (-0.0065, 0.0150)),
            ("Artisan Village Crafts", Exploration, Budget, 8.0, Afternoon, 2.0, (0.0100, 0.0050)),
            ("Ouladine Lagoon Canoe", Exploration, Budget, 15.0, Afternoon, 2.0, (0.0150, 0.0200)),
            ("Lagoon Kayak Tour", Exploration, MidRange, 40.0, Afternoon, 2.0, (0.0080, 0.0120)),
            ("Pottery Workshop", Culture, MidRange, 35.0, Afternoon, 2.0, (0.0110, 0.0060)),
            ("Private Lagoon Sunset Sail", Beach, Luxury, 160.0, Afternoon, 2.5, (0.0090, 0.0180)),
            ("Beach Resort Spa", Beach, Luxury, 120.0, Afternoon, 2.0, (-0.0060, 0.0140)),
            ("Beach Bar Drumming Night", Nightlife, Budget, 10.0, Evening, 2.0, (-0.0055, 0.0050)),
            ("Maquis Live Band", Nightlife, MidRange, 45.0, Evening, 2.5, (0.0030, 0.0030)),
            ("Beach Club VIP Night", Nightlife, Luxury, 130.0, Evening, 3.0, (-0.0060, 0.0120)),
        ],
        restaurants: &[
            ("Chez Tantie Akissi", "Ivorian", Budget, 9.0, Lunch, (0.0010, 0.0010)),
            ("Grillade de la Plage", "Grill", Budget, 10.0, Dinner, (-0.0055, 0.0045)),
            ("La Madrague", "Seafood", MidRange, 32.0, Lunch, (-0.0050, 0.0060)),
            ("Le Wharf", "French", MidRange, 38.0, Dinner, (-0.0060, 0.0020)),
            ("Villa Bassam Terrace", "Gastronomic", Luxury, 85.0, Lunch, (0.0030, 0.0000)),
            ("Océan Lounge", "Seafood", Luxury, 95.0, Dinner, (-0.0065, 0.0130)),
        ],
        hotels: &[
            ("Auberge du Phare", Budget, 35.0, (-0.0040, 0.0030)),
            ("La Taverne Bassamoise", MidRange, 85.0, (-0.0050, 0.0050)),
            ("Étoile du Sud Resort", Luxury, 220.0, (-0.0060, 0.0130)),
        ],
    },
    CitySeed {
        id: "assinie",
        name: "Assinie-Mafia",
        center: GeoPoint::new(5.1290, -3.2770),
        category: CityCategory::Resort,
        has_airport: false,
        nightlife: false,
        activities: &[
            ("Assinie Beach Day", Beach, Budget, 5.0, Morning, 2.0, (-0.0030, 0.0000)),
            ("Fishing Village Walk", Exploration, Budget, 5.0, Morning, 1.5, (0.0050, -0.0100)),
            ("Jet Ski Rental", Beach, MidRange, 70.0, Morning, 1.5, (-0.0035, 0.0080)),
            ("Mangrove Kayak", Exploration, MidRange, 45.0, Morning, 2.0, (0.0080, 0.0050)),
            ("Private Catamaran Excursion", Beach, Luxury, 200.0, Morning, 3.0, (-0.0040, 0.0200)),
            ("Deep-Sea Fishing Charter", Exploration, Luxury, 190.0, Morning, 3.0, (-0.0050, 0.0300)),
            ("Lagoon Swim at Assouindé", Beach, Budget, 5.0, Afternoon, 2.0, (0.0020, -0.0350)),
            ("Coconut Grove Cycling", Exploration, Budget, 12.0, Afternoon, 2.0, (0.0030, 0.0030)),
            ("Kitesurf Lesson", Beach, MidRange, 75.0, Afternoon, 2.0, (-0.0030, 0.0120)),
            ("Pirogue Lagoon Tour", Exploration, MidRange, 40.0, Afternoon, 2.0, (0.0060, 0.0020)),
            ("Private Island Picnic", Beach, Luxury, 180.0, Afternoon, 3.0, (0.0100, 0.0250)),
            ("Resort Spa Treatment", Beach, Luxury, 140.0, Afternoon, 2.0, (-0.0020, 0.0150)),
            ("Sunset Beach Bonfire", Beach, Budget, 10.0, Evening, 2.0, (-0.0035, 0.0020)),
            ("Seafood Grill Night", Exploration, MidRange, 55.0, Evening, 2.0, (-0.0020, 0.0060)),
            ("Private Sunset Cruise", Beach, Luxury, 170.0, Evening, 2.0, (0.0050, 0.0180)),
        ],
        restaurants: &[
            ("Maquis de la Lagune", "Ivorian", Budget, 10.0, Lunch, (0.0030, 0.0010)),
            ("Grillade Assinie Plage", "Grill", Budget, 12.0, Dinner, (-0.0030, 0.0030)),
            ("Le Coco Beach", "Seafood", MidRange, 38.0, Lunch, (-0.0035, 0.0070)),
            ("Case d'Akwaba", "Ivorian", MidRange, 40.0, Dinner, (0.0010, 0.0050)),
            ("Assinie Beach Club Restaurant", "Gastronomic", Luxury, 95.0, Lunch, (-0.0040, 0.0160)),
            ("Le Lagon Bleu", "French", Luxury, 100.0, Dinner, (-0.0030, 0.0140)),
        ],
        hotels: &[
            ("Campement Les Cocotiers", Budget, 45.0, (0.0010, 0.0020)),
            ("Assinie Lodge", MidRange, 110.0, (-0.0030, 0.0060)),
            ("Assinie Beach Club Resort", Luxury, 320.0, (-0.0040, 0.0160)),
        ],
    },
    CitySeed {
        id: "yamoussoukro",
        name: "Yamoussoukro",
        center: GeoPoint::new(6.8200, -5.2770),
        category: CityCategory::Capital,
        has_airport: true,
        nightlife: false,
        activities: &[
            ("Basilica of Our Lady of Peace", Culture, Budget, 8.0, Morning, 2.0, (-0.0170, -0.0230)),
            ("Crocodile Lake", Exploration, Budget, 2.0, Morning, 1.0, (0.0030, 0.0060)),
            ("Houphouët-Boigny Foundation", Culture, MidRange, 20.0, Morning, 1.5, (0.0100, 0.0200)),
            ("Guided Architecture Tour", Culture, MidRange, 45.0, Morning, 2.5, (0.0000, 0.0000)),
            ("Private Basilica Dome Tour", Culture, Luxury, 120.0, Morning, 2.0, (-0.0165, -0.0225)),
            ("Chauffeured Heritage Circuit", Culture, Luxury, 150.0, Morning, 3.0, (0.0050, 0.0050)),
            ("Yamoussoukro Market", Exploration, Budget, 5.0, Afternoon, 1.5, (0.0020, -0.0020)),
            ("Lake Kossou Viewpoint", Exploration, Budget, 10.0, Afternoon, 2.0, (0.0900, -0.0600)),
            ("Golf de Yamoussoukro Lesson", Exploration, MidRange, 60.0, Afternoon, 2.0, (0.0150, 0.0300)),
            ("Grand Mosque Visit", Culture, MidRange, 15.0, Afternoon, 1.0, (0.0040, -0.0040)),
            ("Private Lake Kossou Boat Trip", Exploration, Luxury, 160.0, Afternoon, 3.0, (0.0950, -0.0650)),
            ("Championship Golf Round", Exploration, Luxury, 170.0, Afternoon, 3.0, (0.0160, 0.0310)),
            ("Crocodile Feeding at Dusk", Exploration, Budget, 5.0, Evening, 1.0, (0.0030, 0.0065)),
            ("Cultural Dance Show", Culture, MidRange, 40.0, Evening, 2.0, (0.0010, 0.0010)),
            ("Private Dinner Concert", Culture, Luxury, 150.0, Evening, 2.0, (0.0100, 0.0190)),
        ],
        restaurants: &[
            ("Maquis Le Baobab", "Ivorian", Budget, 8.0, Lunch, (0.0010, 0.0000)),
            ("Allocodrome de Yamoussoukro", "Street food", Budget, 7.0, Dinner, (0.0020, -0.0010)),
            ("Le Jardin", "Ivorian", MidRange, 28.0, Lunch, (0.0030, 0.0020)),
            ("La Paillote", "French", MidRange, 32.0, Dinner, (0.0000, 0.0030)),
            ("Restaurant du Président", "Gastronomic", Luxury, 80.0, Lunch, (0.0140, 0.0290)),
            ("Le Kossou", "French", Luxury, 90.0, Dinner, (0.0145, 0.0295)),
        ],
        hotels: &[
            ("Hôtel Agneby", Budget, 30.0, (0.0010, 0.0010)),
            ("Hôtel Les Parlementaires", MidRange, 70.0, (0.0050, 0.0080)),
            ("Hôtel Président", Luxury, 180.0, (0.0140, 0.0290)),
        ],
    },
    CitySeed {
        id: "sassandra",
        name: "Sassandra",
        center: GeoPoint::new(4.9530, -6.0850),
        category: CityCategory::Resort,
        has_airport: false,
        nightlife: false,
        activities: &[
            ("Sassandra Town Beach", Beach, Budget, 3.0, Morning, 2.0, (-0.0030, 0.0010)),
            ("Fishing Port Visit", Exploration, Budget, 5.0, Morning, 1.5, (0.0000, 0.0030)),
            ("Niega Beach Excursion", Beach, MidRange, 40.0, Morning, 3.0, (-0.0200, 0.0600)),
            ("River Mouth Pirogue Tour", Exploration, MidRange, 45.0, Morning, 2.0, (0.0020, 0.0050)),
            ("Private Coastline Boat Charter", Beach, Luxury, 180.0, Morning, 3.0, (-0.0020, 0.0060)),
            ("Whale Watching Excursion", Exploration, Luxury, 150.0, Morning, 3.0, (-0.0040, 0.0080)),
            ("Governor's Residence Ruins", Culture, Budget, 5.0, Afternoon, 1.5, (0.0030, -0.0020)),
            ("Batelebre Beach Walk", Beach, Budget, 5.0, Afternoon, 2.0, (-0.0100, -0.0300)),
            ("Surfing at Poly Plage", Beach, MidRange, 50.0, Afternoon, 2.0, (-0.0150, 0.0400)),
            ("Mangrove Birdwatching", Exploration, MidRange, 35.0, Afternoon, 2.0, (0.0100, 0.0100)),
            ("Private Beach Lodge Afternoon", Beach, Luxury, 140.0, Afternoon, 3.0, (-0.0050, 0.0100)),
            ("Guided Sport Fishing", Exploration, Luxury, 160.0, Afternoon, 3.0, (0.0010, 0.0060)),
            ("Fishermen's Evening Market", Exploration, Budget, 5.0, Evening, 1.5, (0.0005, 0.0025)),
            ("Beach Barbecue", Beach, MidRange, 45.0, Evening, 2.0, (-0.0030, 0.0020)),
            ("Candlelit Beach Dinner Show", Beach, Luxury, 160.0, Evening, 2.0, (-0.0045, 0.0090)),
        ],
        restaurants: &[
            ("Chez Maman Sassandra", "Ivorian", Budget, 8.0, Lunch, (0.0010, 0.0020)),
            ("Grillade du Port", "Grill", Budget, 9.0, Dinner, (0.0000, 0.0035)),
            ("Le Pollet", "Seafood", MidRange, 30.0, Lunch, (-0.0020, 0.0015)),
            ("La Route du Large", "Seafood", MidRange, 35.0, Dinner, (-0.0025, 0.0030)),
            ("Le Boucanier", "Gastronomic", Luxury, 80.0, Lunch, (-0.0040, 0.0075)),
            ("Sassandra Bay Grill", "Seafood", Luxury, 90.0, Dinner, (-0.0045, 0.0085)),
        ],
        hotels: &[
            ("Campement Le Pollet", Budget, 30.0, (-0.0020, 0.0010)),
            ("Hôtel La Route du Large", MidRange, 75.0, (-0.0025, 0.0030)),
            ("Sassandra Bay Resort", Luxury, 190.0, (-0.0045, 0.0080)),
        ],
    },
    CitySeed {
        id: "man",
        name: "Man",
        center: GeoPoint::new(7.4125, -7.5538),
        category: CityCategory::Mountain,
        has_airport: true,
        nightlife: false,
        activities: &[
            ("La Dent de Man Hike", Mountain, Budget, 10.0, Morning, 3.0, (0.0300, 0.0500)),
            ("La Cascade Waterfall", Mountain, Budget, 5.0, Morning, 2.0, (-0.0200, -0.0300)),
            ("Mount Tonkoui Guided Climb", Mountain, MidRange, 50.0, Morning, 3.0, (0.0500, -0.1000)),
            ("Lieupleu Liana Bridge", Exploration, MidRange, 40.0, Morning, 2.5, (-0.1500, 0.0500)),
            ("Private Mountain Trek", Mountain, Luxury, 140.0, Morning, 3.0, (0.0310, 0.0510)),
            ("Scenic Helicopter Flight", Exploration, Luxury, 250.0, Morning, 1.5, (0.0100, 0.0100)),
            ("Dan Mask Village", Culture, Budget, 8.0, Afternoon, 2.0, (0.0050, 0.0050)),
            ("Coffee Plantation Walk", Exploration, Budget, 10.0, Afternoon, 2.0, (-0.0100, 0.0200)),
            ("Forest Canopy Walk", Mountain, MidRange, 45.0, Afternoon, 2.0, (-0.0190, -0.0290)),
            ("Stilt Dancers Performance", Culture, MidRange, 40.0, Afternoon, 1.5, (0.0020, 0.0010)),
            ("Private Dan Cultural Immersion", Culture, Luxury, 130.0, Afternoon, 3.0, (0.0060, 0.0060)),
            ("Tonkoui Summit Picnic", Mountain, Luxury, 120.0, Afternoon, 2.5, (0.0510, -0.1010)),
            ("Village Storytelling", Culture, Budget, 5.0, Evening, 1.5, (0.0040, 0.0040)),
            ("Mask Dance Evening", Culture, MidRange, 35.0, Evening, 2.0, (0.0010, 0.0000)),
            ("Mountain Lodge Concert", Culture, Luxury, 120.0, Evening, 2.0, (0.0080, 0.0070)),
        ],
        restaurants: &[
            ("Maquis des Montagnes", "Ivorian", Budget, 7.0, Lunch, (0.0010, 0.0010)),
            ("Chez Tonton Man", "Grill", Budget, 8.0, Dinner, (0.0000, 0.0020)),
            ("Le Belvédère", "Ivorian", MidRange, 25.0, Lunch, (0.0070, 0.0080)),
            ("Restaurant Les Cascades", "French", MidRange, 30.0, Dinner, (-0.0180, -0.0280)),
            ("Mountain View Terrace", "Gastronomic", Luxury, 70.0, Lunch, (0.0090, 0.0080)),
            ("Le Tonkpi", "French", Luxury, 80.0, Dinner, (0.0085, 0.0075)),
        ],
        hotels: &[
            ("Hôtel Leviathan", Budget, 25.0, (0.0010, 0.0000)),
            ("Hôtel Les Cascades", MidRange, 65.0, (-0.0180, -0.0280)),
            ("Tonkpi Mountain Lodge", Luxury, 150.0, (0.0080, 0.0070)),
        ],
    },
    CitySeed {
        id: "korhogo",
        name: "Korhogo",
        center: GeoPoint::new(9.4580, -5.6296),
        category: CityCategory::Cultural,
        has_airport: true,
        nightlife: false,
        activities: &[
            ("Senufo Weavers' Village", Culture, Budget, 5.0, Morning, 2.0, (0.0300, 0.0200)),
            ("Korhogo Cloth Market", Exploration, Budget, 5.0, Morning, 1.5, (0.0000, 0.0000)),
            ("Mount Korhogo Hike", Mountain, MidRange, 35.0, Morning, 2.5, (0.0200, -0.0150)),
            ("Sacred Forest Visit", Culture, MidRange, 40.0, Morning, 2.0, (0.0400, 0.0300)),
            ("Private Senufo Art Tour", Culture, Luxury, 120.0, Morning, 3.0, (0.0020, 0.0020)),
            ("Chauffeured Savanna Safari", Exploration, Luxury, 160.0, Morning, 3.0, (0.1000, 0.0500)),
            ("Blacksmiths of Koni", Culture, Budget, 5.0, Afternoon, 2.0, (0.1200, -0.0500)),
            ("Potters of Kassoumbarga", Culture, Budget, 8.0, Afternoon, 2.0, (0.0100, 0.0100)),
            ("Waraniéné Weaving Workshop", Culture, MidRange, 40.0, Afternoon, 2.0, (-0.0400, -0.0200)),
            ("Savanna Park Excursion", Exploration, MidRange, 60.0, Afternoon, 3.0, (0.0800, 0.0600)),
            ("Private Artisan Commission", Culture, Luxury, 150.0, Afternoon, 2.5, (0.0030, 0.0030)),
            ("Savanna Sundowner", Exploration, Luxury, 130.0, Afternoon, 2.0, (0.0500, 0.0400)),
            ("Balafon Music Evening", Culture, Budget, 8.0, Evening, 1.5, (0.0010, 0.0010)),
            ("Poro Dance Performance", Culture, MidRange, 40.0, Evening, 2.0, (0.0020, 0.0000)),
            ("Private Griot Performance", Culture, Luxury, 120.0, Evening, 2.0, (0.0040, 0.0030)),
        ],
        restaurants: &[
            ("Maquis du Poro", "Ivorian", Budget, 7.0, Lunch, (0.0010, 0.0010)),
            ("Chez Fatou", "Senufo", Budget, 8.0, Dinner, (0.0020, -0.0010)),
            ("Le Sénoufo", "Ivorian", MidRange, 25.0, Lunch, (0.0020, 0.0020)),
            ("La Savane", "Grill", MidRange, 30.0, Dinner, (0.0030, 0.0010)),
            ("Le Palais du Nord", "Gastronomic", Luxury, 70.0, Lunch, (0.0040, 0.0040)),
            ("Table du Poro", "French", Luxury, 75.0, Dinner, (0.0035, 0.0035)),
        ],
        hotels: &[
            ("Hôtel Mont Korhogo", Budget, 25.0, (0.0050, -0.0050)),
            ("Hôtel La Rotonde", MidRange, 60.0, (0.0020, 0.0020)),
            ("Korhogo Palace", Luxury, 140.0, (0.0040, 0.0040)),
        ],
    },
    CitySeed {
        id: "bouake",
        name: "Bouaké",
        center: GeoPoint::new(7.6900, -5.0300),
        category: CityCategory::Other,
        has_airport: true,
        nightlife: false,
        activities: &[
            ("Grand Marché de Bouaké", Exploration, Budget, 5.0, Morning, 2.0, (0.0000, 0.0000)),
            ("Cathedral of Bouaké", Culture, Budget, 2.0, Morning, 1.0, (0.0050, 0.0030)),
            ("Baoulé Village Day Trip", Culture, MidRange, 45.0, Morning, 3.0, (0.0800, -0.0600)),
            ("Kossou Dam Excursion", Exploration, MidRange, 50.0, Morning, 3.0, (-0.0500, -0.3000)),
            ("Gold Weights Collection", Culture, Luxury, 110.0, Morning, 2.0, (0.0040, 0.0020)),
            ("Chauffeured Countryside Tour", Exploration, Luxury, 140.0, Morning, 3.0, (0.0600, 0.0400)),
            ("Artisan Weaving Center", Culture, Budget, 5.0, Afternoon, 1.5, (0.0030, 0.0040)),
            ("Botanical Walk", Exploration, Budget, 5.0, Afternoon, 1.5, (0.0100, -0.0100)),
            ("Mask Carving Workshop", Culture, MidRange, 35.0, Afternoon, 2.0, (0.0020, 0.0020)),
            ("Goli Festival Grounds", Culture, MidRange, 30.0, Afternoon, 1.5, (0.0060, 0.0050)),
            ("Private Carving Masterclass", Culture, Luxury, 120.0, Afternoon, 2.5, (0.0025, 0.0025)),
            ("Spa Afternoon in Bouaké", Exploration, Luxury, 110.0, Afternoon, 2.0, (0.0070, 0.0070)),
            ("Street Food Evening Walk", Exploration, Budget, 8.0, Evening, 1.5, (0.0010, 0.0010)),
            ("Baoulé Music Night", Culture, MidRange, 35.0, Evening, 2.0, (0.0030, 0.0000)),
            ("Private Cultural Banquet", Culture, Luxury, 130.0, Evening, 2.5, (0.0070, 0.0060)),
        ],
        restaurants: &[
            ("Maquis du Centre", "Ivorian", Budget, 7.0, Lunch, (0.0010, 0.0000)),
            ("Allocodrome de Bouaké", "Street food", Budget, 6.0, Dinner, (0.0000, 0.0010)),
            ("Le Baoulé", "Ivorian", MidRange, 24.0, Lunch, (0.0030, 0.0030)),
            ("Restaurant de l'Air", "French", MidRange, 28.0, Dinner, (0.0040, 0.0020)),
            ("Le Gouverneur", "Gastronomic", Luxury, 65.0, Lunch, (0.0060, 0.0060)),
            ("Salon du Centre", "French", Luxury, 70.0, Dinner, (0.0065, 0.0065)),
        ],
        hotels: &[
            ("Hôtel Le Provençal", Budget, 25.0, (0.0020, 0.0010)),
            ("Hôtel Mon Afrik", MidRange, 60.0, (0.0040, 0.0030)),
            ("Bouaké Grand Hôtel", Luxury, 130.0, (0.0065, 0.0060)),
        ],
    },
];

/// Build and validate the built-in Ivory Coast catalog.
pub fn ivory_coast() -> Result<Catalog, CatalogError> {
    let mut builder = CatalogBuilder::new(CityId::parse(BASE_CITY)?);

    for seed in CITIES {
        let Ok(id) = CityId::parse(seed.id) else {
            continue;
        };
        builder = builder.city(City {
            id: id.clone(),
            name: seed.name.to_string(),
            location: seed.center,
            category: seed.category,
            has_airport: seed.has_airport,
            nightlife: seed.nightlife,
        });

        for &(name, kind, tier, cost, best_time, duration, offset) in seed.activities {
            builder = builder.activity(Activity {
                name: name.to_string(),
                city: id.clone(),
                kind,
                tier,
                cost,
                location: shifted(seed.center, offset),
                best_time,
                duration: hours(duration),
            });
        }
        for &(name, cuisine, tier, cost, best_time, offset) in seed.restaurants {
            builder = builder.restaurant(Restaurant {
                name: name.to_string(),
                cuisine: cuisine.to_string(),
                city: id.clone(),
                tier,
                cost,
                location: shifted(seed.center, offset),
                best_time,
            });
        }
        for &(name, tier, cost, offset) in seed.hotels {
            builder = builder.hotel(Hotel {
                name: name.to_string(),
                city: id.clone(),
                tier,
                cost,
                location: shifted(seed.center, offset),
            });
        }
    }

    for option in transport_options() {
        builder = builder.transport(option);
    }
    for flight in flights() {
        builder = builder.flight(flight);
    }

    builder
        .travel_times(travel_times())
        .route_table(route_table())
        .build()
}

fn shifted(center: GeoPoint, (dlat, dlon): Offset) -> GeoPoint {
    GeoPoint::new(center.latitude + dlat, center.longitude + dlon)
}

fn cities(slugs: &[&str]) -> Availability {
    Availability::Cities(slugs.iter().filter_map(|s| CityId::parse(s).ok()).collect())
}

fn transport_options() -> Vec<TransportOption> {
    use TransportScope::{InterCity, IntraCity};

    let option = |mode, cost_model, tier, scope, availability| TransportOption {
        mode,
        cost_model,
        tier,
        scope,
        availability,
    };

    vec![
        option(TransportMode::PrivateCar, CostModel::PerHour(25.0), Luxury, InterCity, Availability::Everywhere),
        option(TransportMode::RentalCar, CostModel::PerHour(15.0), MidRange, InterCity, Availability::Everywhere),
        option(
            TransportMode::InterCityCoach,
            CostModel::PerHour(8.0),
            Budget,
            InterCity,
            cities(&["abidjan", "grand-bassam", "yamoussoukro", "sassandra", "man", "korhogo", "bouake"]),
        ),
        option(TransportMode::PublicTransport, CostModel::PerHour(5.0), Budget, InterCity, Availability::Everywhere),
        option(TransportMode::PrivateCar, CostModel::Flat(10.0), Luxury, IntraCity, Availability::Everywhere),
        option(TransportMode::Taxi, CostModel::Flat(5.0), MidRange, IntraCity, Availability::Everywhere),
        option(TransportMode::RideShare, CostModel::Flat(6.0), MidRange, IntraCity, cities(&["abidjan", "yamoussoukro", "bouake"])),
        option(TransportMode::SharedTaxi, CostModel::Flat(2.0), Budget, IntraCity, cities(&["abidjan", "bouake", "korhogo"])),
        option(TransportMode::BoatBus, CostModel::Flat(1.0), Budget, IntraCity, cities(&["abidjan"])),
    ]
}

fn flights() -> Vec<Flight> {
    let flight = |from: &str, to: &str, price: f64, duration: f64| {
        let (Ok(from), Ok(to)) = (CityId::parse(from), CityId::parse(to)) else {
            return None;
        };
        Some(Flight {
            from,
            to,
            price,
            carrier: "Air Côte d'Ivoire".to_string(),
            duration: hours(duration),
        })
    };

    [
        flight("abidjan", "korhogo", 120.0, 1.25),
        flight("abidjan", "man", 110.0, 1.0),
        flight("abidjan", "bouake", 95.0, 1.0),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn travel_times() -> super::TravelTimes {
    TravelTimesBuilder::new()
        .add("abidjan", "grand-bassam", 0.75)
        .add("abidjan", "assinie", 1.5)
        .add("abidjan", "yamoussoukro", 3.0)
        .add("abidjan", "sassandra", 4.0)
        .add("abidjan", "bouake", 5.0)
        .add("abidjan", "man", 7.0)
        .add("abidjan", "korhogo", 9.0)
        .add("grand-bassam", "assinie", 1.0)
        .add("grand-bassam", "yamoussoukro", 3.5)
        .add("grand-bassam", "sassandra", 4.5)
        .add("grand-bassam", "bouake", 5.5)
        .add("assinie", "yamoussoukro", 4.5)
        .add("assinie", "sassandra", 5.5)
        .add("yamoussoukro", "sassandra", 4.0)
        .add("yamoussoukro", "bouake", 1.5)
        .add("yamoussoukro", "man", 4.0)
        .add("yamoussoukro", "korhogo", 5.0)
        .add("sassandra", "man", 5.0)
        .add("man", "korhogo", 6.0)
        .add("man", "bouake", 5.0)
        .add("korhogo", "bouake", 3.5)
        .build()
}

fn route_table() -> super::RouteTable {
    RouteTableBuilder::new()
        .band(1, Some(3), &["grand-bassam"], false)
        .band(
            4,
            Some(7),
            &["grand-bassam", "assinie", "yamoussoukro", "sassandra", "man"],
            false,
        )
        .band(
            8,
            None,
            &["grand-bassam", "assinie", "yamoussoukro", "sassandra", "man", "korhogo", "bouake"],
            true,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> CityId {
        CityId::parse(s).unwrap()
    }

    #[test]
    fn every_city_has_hotels_in_every_tier() {
        let catalog = ivory_coast().unwrap();
        for city in catalog.cities() {
            for tier in BudgetTier::ALL {
                assert!(
                    catalog.hotels_in(&city.id).any(|h| h.tier == tier),
                    "{} has no {} hotel",
                    city.id,
                    tier
                );
            }
        }
    }

    #[test]
    fn activity_names_are_unique() {
        let catalog = ivory_coast().unwrap();
        let mut names: Vec<_> = catalog.activities().iter().map(|a| a.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn nightlife_cities_have_nightlife_activities() {
        let catalog = ivory_coast().unwrap();
        for city in catalog.cities().iter().filter(|c| c.nightlife) {
            assert!(catalog.activities_in(&city.id).any(|a| a.kind == Nightlife));
        }
    }

    #[test]
    fn travel_times_are_symmetric_for_listed_pairs() {
        let catalog = ivory_coast().unwrap();
        let a = id("abidjan");
        let m = id("man");
        assert_eq!(catalog.travel_time(&a, &m), catalog.travel_time(&m, &a));
        assert_eq!(catalog.travel_time(&a, &m), chrono::Duration::hours(7));
    }

    #[test]
    fn venues_sit_near_their_city() {
        let catalog = ivory_coast().unwrap();
        for activity in catalog.activities() {
            let city = catalog.city(&activity.city).unwrap();
            assert!(activity.location.distance_km(&city.location) < 50.0, "{}", activity.name);
        }
    }
}
