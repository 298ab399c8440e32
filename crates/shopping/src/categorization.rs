use std::collections::{HashMap, HashSet};

use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

/// Grocery store aisle, in display order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    VariantArray,
)]
pub enum Category {
    Produce,
    #[strum(serialize = "Meat Department")]
    Meat,
    Seafood,
    Dairy,
    Deli,
    #[strum(serialize = "Baking Aisle")]
    BakingAisle,
    #[strum(serialize = "Baked Goods")]
    BakedGoods,
    #[strum(serialize = "Junk Food")]
    JunkFood,
    #[strum(serialize = "Breakfast Aisle")]
    BreakfastAisle,
    #[strum(serialize = "Frozen Food")]
    FrozenFood,
    #[strum(serialize = "Canned Food")]
    CannedFood,
    Pasta,
    Cooler,
    #[strum(serialize = "Seasoning/Spices/Sauces")]
    Seasonings,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Position in the aisle order, `None` for categories outside the declared list
    pub fn display_rank(name: &str) -> Option<usize> {
        Category::VARIANTS.iter().position(|c| c.as_str() == name)
    }

    fn builtin_keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Produce => PRODUCE,
            Category::Meat => MEAT,
            Category::Seafood => SEAFOOD,
            Category::Dairy => DAIRY,
            Category::Deli => DELI,
            Category::BakingAisle => BAKING_AISLE,
            Category::BakedGoods => BAKED_GOODS,
            Category::JunkFood => JUNK_FOOD,
            Category::BreakfastAisle => BREAKFAST_AISLE,
            Category::FrozenFood => FROZEN_FOOD,
            Category::CannedFood => CANNED_FOOD,
            Category::Pasta => PASTA,
            Category::Cooler => COOLER,
            Category::Seasonings => SEASONINGS,
            Category::Other => &[],
        }
    }
}

#[derive(Debug, Clone)]
struct KeywordList {
    category: String,
    keywords: HashSet<String>,
}

/// Keyword and density tables used to categorize and weigh ingredients
///
/// Built once and shared read-only by every aggregation run. Names are
/// matched exactly (after lowercasing and trimming) so that "pepper" and
/// "red pepper flakes" can live in different aisles.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<KeywordList>,
    densities: HashMap<String, f64>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Catalog with no keywords and no densities; every ingredient is "Other"
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            densities: HashMap::new(),
        }
    }

    /// Catalog with the built-in aisle keywords and flour/sugar densities
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for category in Category::VARIANTS {
            let keywords = category.builtin_keywords();
            if !keywords.is_empty() {
                catalog = catalog.with_keywords(category.as_str(), keywords.iter().copied());
            }
        }
        for (name, ounces_per_cup) in DENSITY_OUNCES_PER_CUP {
            catalog = catalog.with_density(name, *ounces_per_cup);
        }
        catalog
    }

    /// Add keywords to a category
    ///
    /// Categories not seen before are checked after the existing ones.
    pub fn with_keywords<I, S>(mut self, category: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = keywords
            .into_iter()
            .map(|keyword| normalize_name(keyword.as_ref()))
            .filter(|keyword| !keyword.is_empty());

        match self.categories.iter().position(|list| list.category == category) {
            Some(index) => self.categories[index].keywords.extend(normalized),
            None => self.categories.push(KeywordList {
                category: category.to_string(),
                keywords: normalized.collect(),
            }),
        }
        self
    }

    /// Set the density (ounces per cup) used to weigh an ingredient measured by volume
    pub fn with_density(mut self, name: &str, ounces_per_cup: f64) -> Self {
        self.densities.insert(normalize_name(name), ounces_per_cup);
        self
    }

    /// Categorize an ingredient by exact keyword match
    ///
    /// The first category (in declaration order) listing the name wins.
    /// Unmatched names are "Other".
    pub fn determine_category(&self, ingredient_name: &str) -> &str {
        let normalized = normalize_name(ingredient_name);

        self.categories
            .iter()
            .find(|list| list.keywords.contains(&normalized))
            .map(|list| list.category.as_str())
            .unwrap_or(Category::Other.as_str())
    }

    /// Ounces per cup for an ingredient, by exact name
    pub fn density_for(&self, ingredient_name: &str) -> Option<f64> {
        self.densities.get(&normalize_name(ingredient_name)).copied()
    }

    /// Whether volume measures of this ingredient should be weighed instead
    pub fn is_flour_or_sugar(&self, ingredient_name: &str) -> bool {
        let normalized = normalize_name(ingredient_name);
        self.densities.contains_key(&normalized)
            || normalized.contains("flour")
            || normalized.contains("sugar")
    }
}

pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

const DENSITY_OUNCES_PER_CUP: &[(&str, f64)] = &[
    ("flour", 4.25),
    ("all-purpose flour", 4.25),
    ("purpose flour", 4.25),
    ("self-rising flour", 4.0),
    ("bread flour", 4.5),
    ("whole wheat flour", 4.0),
    ("wheat flour", 4.0),
    ("white flour", 4.25),
    ("cake flour", 3.9),
    ("sugar", 7.0),
    ("granulated sugar", 7.0),
    ("brown sugar", 7.5),
    ("white sugar", 7.0),
    ("powdered sugar", 4.0),
    ("confectioner sugar", 4.0),
];

const PRODUCE: &[&str] = &[
    "acorn squash",
    "apple",
    "apples",
    "arugula",
    "asparagus",
    "avocado",
    "baby bok choy",
    "baby spinach",
    "banana",
    "basil leaves",
    "beet",
    "bell pepper",
    "berries",
    "bok choy",
    "broccoli",
    "butternut squash",
    "cabbage",
    "carrot",
    "carrots-medium",
    "carrots",
    "cauliflower",
    "chopped cilantro",
    "chives",
    "cranberries",
    "cucumber",
    "celery",
    "celery stalks",
    "cherry tomatoes",
    "cilantro",
    "coconut",
    "corn",
    "daikon radish",
    "eggplant",
    "fennel bulb",
    "fresh parsley",
    "fresh asparagus",
    "fresh thyme",
    "garlic",
    "ginger",
    "ginger root",
    "green beans",
    "green bell pepper",
    "green onion",
    "green onions",
    "green pepper",
    "herb",
    "herbs",
    "jalapeno",
    "jalapeno pepper - small",
    "red bell pepper - medium",
    "red onion",
    "kale",
    "leek",
    "lemon",
    "lettuce",
    "lime",
    "lime wedges",
    "mango",
    "mushroom",
    "napa cabbage",
    "onion",
    "orange",
    "parsley",
    "pineapple",
    "potato",
    "radishes",
    "roma tomatoes",
    "scallions",
    "spinach",
    "strawberries",
    "sweet potato",
    "tomato",
    "turnip",
    "white onion",
    "white onion - large",
    "yellow onions",
    "zucchini",
];

const MEAT: &[&str] = &[
    "bacon",
    "beef",
    "boneless pork shoulder",
    "chicken",
    "chicken breast",
    "chicken breast half",
    "chicken thighs",
    "ground beef",
    "ham",
    "lamb",
    "pork",
    "pork belly",
    "sausage",
    "steak",
    "turkey",
];

const SEAFOOD: &[&str] = &[
    "anchovies",
    "calamari",
    "clams",
    "cod",
    "crabmeat",
    "fish",
    "mussels",
    "salmon",
    "sardines",
    "scallops",
    "shrimp",
    "tuna",
];

const DAIRY: &[&str] = &[
    "butter",
    "buttermilk",
    "cottage cheese",
    "cheddar cheese",
    "cream cheese",
    "feta cheese",
    "greek yogurt",
    "heavy whipping cream",
    "mexican cheese",
    "milk",
    "mozzarella cheese",
    "cheese",
    "parmesan cheese",
    "ricotta cheese",
    "swiss cheese",
    "whipping cream",
    "gruyere cheese",
    "sour cream",
    "yogurt",
    "parmesan cheese - shredded",
];

const DELI: &[&str] = &[
    "ham",
    "cooked ham",
    "prosciutto slices",
    "prosciutto",
    "pepperoni",
    "turkey",
    "sliced turkey breast",
    "italian sausage",
    "smoked sausage",
    "beef brisket",
    "queso fresco",
    "coleslaw",
    "dill pickles",
    "pickled jalapenos",
    "black olives",
    "green olives",
    "pasta salad",
    "assorted meats",
    "hard-boiled eggs",
    "hummus",
];

const BAKING_AISLE: &[&str] = &[
    "all-purpose flour",
    "purpose flour",
    "baking powder",
    "baking soda",
    "brown sugar",
    "cocoa powder",
    "confectioner sugar",
    "cornstarch",
    "flour",
    "granulated sugar",
    "grated parmesan cheese",
    "molasses",
    "salt",
    "sea salt",
    "self rising flour",
    "sugar",
    "vanilla extract",
    "wheat flour",
    "white sugar",
    "yeast",
    "clove",
    "almond extract",
    "cornmeal",
];

const BAKED_GOODS: &[&str] = &[
    "bagel",
    "baguette",
    "bread",
    "ciabatta bread",
    "corn tortillas",
    "flour tortilla",
    "naan",
    "pita bread",
    "whole wheat bread",
    "whole grain bread",
    "wonton wrappers",
    "sourdough bread",
];

const JUNK_FOOD: &[&str] = &[
    "coke classic",
    "chips",
    "soda",
    "soft drink",
    "sprite",
    "crackers",
    "graham crackers",
    "chocolate chips",
    "chocolate chip",
    "dark chocolate chips",
    "lime juice",
    "dried cranberries",
    "dried fruit",
    "dried apricots",
];

const BREAKFAST_AISLE: &[&str] = &["cereal", "granola", "oatmeal", "pancake mix", "waffles"];

const FROZEN_FOOD: &[&str] = &[
    "frozen corn",
    "frozen peas",
    "frozen spinach",
    "frozen berries",
    "ice cream",
];

const CANNED_FOOD: &[&str] = &[
    "canned beans",
    "canned tomatoes",
    "canned tuna",
    "soup",
    "tomato paste",
    "cream mushroom soup",
];

const PASTA: &[&str] = &[
    "fettuccine",
    "lasagna noodles",
    "pasta",
    "ramen noodles",
    "spaghetti",
];

const COOLER: &[&str] = &[
    "egg",
    "egg white",
    "eggs",
    "hard-boiled eggs",
    "margerine",
    "egg yolk",
];

const SEASONINGS: &[&str] = &[
    "adobo sauce",
    "balsamic glaze",
    "barbecue sauce",
    "black pepper",
    "buffalo sauce",
    "cajun seasoning",
    "caesar dressing",
    "caraway seed",
    "celery seed",
    "chili flakes",
    "chili garlic sauce",
    "chili oil",
    "chili powder",
    "cinnamon",
    "coriander",
    "cumin",
    "curry powder",
    "dijon mustard",
    "enchilada sauce",
    "fennel seed",
    "fish sauce",
    "five-spice powder",
    "garam masala",
    "garlic powder",
    "guacamole",
    "gochujang",
    "hoisin sauce",
    "hot sauce",
    "ranch dressing",
    "italian seasoning",
    "ketchup",
    "marinara sauce",
    "mayonnaise",
    "mustard",
    "nutritional yeast",
    "old bay seasoning",
    "olive oil",
    "oregano",
    "oyster sauce",
    "paprika",
    "pepper",
    "red pepper flake",
    "salsa",
    "salt",
    "salt pepper",
    "sesame oil",
    "sesame seeds",
    "soy sauce",
    "sriracha",
    "taco seasoning",
    "taco seasoning mix",
    "tamarind paste",
    "thyme",
    "tomato paste",
    "turmeric",
    "vinegar",
    "white vinegar",
    "wasabi paste",
    "worcestershire sauce",
    "balsamic vinegar",
    "apple cider vinegar",
    "rice vinegar",
    "toasted sesame oil",
    "coconut oil",
    "neutral oil",
    "vegetable oil",
    "canola oil",
    "avocado oil",
    "nutmeg",
    "extra virgin olive oil",
    "white wine vinegar",
    "freshly ground black pepper",
];
