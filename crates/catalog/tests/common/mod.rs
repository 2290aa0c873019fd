#![allow(dead_code)]

use async_trait::async_trait;
use catalog::{
    abstract_trait::{
        ChefQueryRepositoryTrait,
        product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    },
    domain::requests::{
        AvailabilityInput, CreateProductRequest, IngredientInput, ProductFilter,
        UpdateProductRequest,
    },
    model::{
        chef::Chef,
        product::{
            Category, Cuisine, Difficulty, Ingredient, NutritionalInfo, Product, ProductWithChef,
            SpiceLevel,
        },
    },
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use shared::errors::RepositoryError;
use sqlx::types::Json;
use std::{
    collections::{BTreeMap, HashMap},
    sync::{
        Mutex,
        atomic::{AtomicI32, Ordering},
    },
};

/// In-memory stand-in for the Postgres repositories. Mirrors the SQL
/// contract: catalog listings see only active+available rows, filter by
/// vocabulary equality, substring-match search over name/description/tags,
/// and sort by rating then recency.
pub struct InMemoryStore {
    pub chefs: Mutex<HashMap<i32, Chef>>,
    pub products: Mutex<BTreeMap<i32, Product>>,
    next_product_id: AtomicI32,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            chefs: Mutex::new(HashMap::new()),
            products: Mutex::new(BTreeMap::new()),
            next_product_id: AtomicI32::new(1),
        }
    }

    pub fn seed_chef(&self, chef: Chef) {
        self.chefs.lock().unwrap().insert(chef.chef_id, chef);
    }

    pub fn seed_product(&self, product: Product) {
        let next = product.product_id + 1;
        self.next_product_id.fetch_max(next, Ordering::SeqCst);
        self.products
            .lock()
            .unwrap()
            .insert(product.product_id, product);
    }

    pub fn product_count(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    fn join(&self, product: Product) -> ProductWithChef {
        let chefs = self.chefs.lock().unwrap();
        let chef = chefs
            .get(&product.chef_id)
            .expect("test seeded a product without its chef");
        ProductWithChef {
            chef_business_name: chef.business_name.clone(),
            chef_rating_average: chef.rating_average,
            chef_rating_count: chef.rating_count,
            chef_service_area: chef.service_area.clone(),
            product,
        }
    }
}

#[async_trait]
impl ChefQueryRepositoryTrait for InMemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Chef>, RepositoryError> {
        Ok(self.chefs.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryStore {
    async fn find_catalog(
        &self,
        filter: &ProductFilter,
    ) -> Result<(Vec<ProductWithChef>, i64), RepositoryError> {
        let mut matches: Vec<Product> = {
            let products = self.products.lock().unwrap();
            products
                .values()
                .filter(|p| p.is_active && p.is_available)
                .filter(|p| filter.category.is_none_or(|c| p.category == c))
                .filter(|p| filter.cuisine.is_none_or(|c| p.cuisine == c))
                .filter(|p| {
                    filter.search.as_deref().is_none_or(|term| {
                        let term = term.to_lowercase();
                        p.name.to_lowercase().contains(&term)
                            || p.description.to_lowercase().contains(&term)
                            || p.tags.iter().any(|t| t.to_lowercase().contains(&term))
                    })
                })
                .cloned()
                .collect()
        };

        matches.sort_by(|a, b| {
            b.rating_average
                .partial_cmp(&a.rating_average)
                .unwrap()
                .then(b.created_at.cmp(&a.created_at))
        });

        let total = matches.len() as i64;
        let skip = ((filter.page - 1).max(0) * filter.limit) as usize;

        let page: Vec<ProductWithChef> = matches
            .into_iter()
            .skip(skip)
            .take(filter.limit as usize)
            .map(|p| self.join(p))
            .collect();

        Ok((page, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductWithChef>, RepositoryError> {
        let product = self.products.lock().unwrap().get(&id).cloned();
        Ok(product.map(|p| self.join(p)))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryStore {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let id = self.next_product_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now().naive_utc();

        let product = Product {
            product_id: id,
            chef_id: req.chef_id,
            name: req.name.clone(),
            description: req.description.clone(),
            category: req.category,
            cuisine: req.cuisine,
            images: req.images.clone(),
            price: req.price,
            servings: req.servings,
            prep_time: req.prep_time,
            cook_time: req.cook_time,
            difficulty: req.difficulty,
            ingredients: Json(
                req.ingredients
                    .iter()
                    .cloned()
                    .map(Ingredient::from)
                    .collect(),
            ),
            nutritional_info: req.nutritional_info.map(|n| Json(NutritionalInfo::from(n))),
            tags: req.tags.clone(),
            dietary: req.dietary.clone(),
            spice_level: req.spice_level,
            instructions: req.instructions.clone(),
            is_available: req.availability.is_available,
            max_orders_per_day: req.availability.max_orders_per_day,
            advance_order_days: req.availability.advance_order_days,
            rating_average: 0.0,
            rating_count: 0,
            orders_total: 0,
            orders_this_week: 0,
            orders_this_month: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.products
            .lock()
            .unwrap()
            .insert(product.product_id, product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = &req.name {
            product.name = name.clone();
        }
        if let Some(description) = &req.description {
            product.description = description.clone();
        }
        if let Some(category) = req.category {
            product.category = category;
        }
        if let Some(cuisine) = req.cuisine {
            product.cuisine = cuisine;
        }
        if let Some(images) = &req.images {
            product.images = images.clone();
        }
        if let Some(price) = req.price {
            product.price = price;
        }
        if let Some(servings) = req.servings {
            product.servings = servings;
        }
        if let Some(prep_time) = req.prep_time {
            product.prep_time = prep_time;
        }
        if let Some(cook_time) = req.cook_time {
            product.cook_time = cook_time;
        }
        if let Some(difficulty) = req.difficulty {
            product.difficulty = difficulty;
        }
        if let Some(ingredients) = &req.ingredients {
            product.ingredients =
                Json(ingredients.iter().cloned().map(Ingredient::from).collect());
        }
        if let Some(nutritional_info) = req.nutritional_info {
            product.nutritional_info = Some(Json(NutritionalInfo::from(nutritional_info)));
        }
        if let Some(tags) = &req.tags {
            product.tags = tags.clone();
        }
        if let Some(dietary) = &req.dietary {
            product.dietary = dietary.clone();
        }
        if let Some(spice_level) = req.spice_level {
            product.spice_level = spice_level;
        }
        if let Some(instructions) = &req.instructions {
            product.instructions = instructions.clone();
        }
        if let Some(availability) = &req.availability {
            product.is_available = availability.is_available;
            product.max_orders_per_day = availability.max_orders_per_day;
            product.advance_order_days = availability.advance_order_days;
        }
        if let Some(is_active) = req.is_active {
            product.is_active = is_active;
        }
        product.updated_at = Utc::now().naive_utc();

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.products.lock().unwrap().remove(&id).is_some())
    }
}

pub fn at_noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn sample_chef(id: i32) -> Chef {
    Chef {
        chef_id: id,
        business_name: format!("Chef {id} Kitchen"),
        bio: Some("Family recipes, small batches".into()),
        service_area: vec!["Chinatown".into(), "Riverside".into()],
        rating_average: 4.7,
        rating_count: 120,
        is_active: true,
        created_at: at_noon(2025, 1, 1),
        updated_at: at_noon(2025, 1, 1),
    }
}

pub fn sample_product(id: i32, chef_id: i32) -> Product {
    let created = at_noon(2025, 6, 1);
    Product {
        product_id: id,
        chef_id,
        name: format!("Dish {id}"),
        description: "A comforting home-cooked plate".into(),
        category: Category::MainCourse,
        cuisine: Cuisine::Malay,
        images: vec![format!("/img/dish-{id}.jpg")],
        price: 9.9,
        servings: 2,
        prep_time: 15,
        cook_time: 30,
        difficulty: Difficulty::Medium,
        ingredients: Json(vec![Ingredient {
            name: "Rice".into(),
            quantity: "2 cups".into(),
            allergens: None,
        }]),
        nutritional_info: None,
        tags: vec!["comfort".into()],
        dietary: vec![],
        spice_level: SpiceLevel::Mild,
        instructions: vec!["Cook it well".into()],
        is_available: true,
        max_orders_per_day: 10,
        advance_order_days: 1,
        rating_average: 0.0,
        rating_count: 0,
        orders_total: 0,
        orders_this_week: 0,
        orders_this_month: 0,
        is_active: true,
        created_at: created,
        updated_at: created,
    }
}

pub fn sample_create_request(chef_id: i32) -> CreateProductRequest {
    CreateProductRequest {
        chef_id,
        name: "Laksa Lemak".into(),
        description: "Rich coconut noodle soup with prawns".into(),
        category: Category::MainCourse,
        cuisine: Cuisine::Malay,
        images: vec!["/img/laksa.jpg".into()],
        price: 11.5,
        servings: 1,
        prep_time: 20,
        cook_time: 40,
        difficulty: Difficulty::Medium,
        ingredients: vec![IngredientInput {
            name: "Prawns".into(),
            quantity: "200g".into(),
            allergens: Some(vec!["Shellfish".into()]),
        }],
        nutritional_info: None,
        tags: vec!["noodles".into(), "spicy".into()],
        dietary: vec![],
        spice_level: SpiceLevel::Hot,
        instructions: vec!["Simmer the laksa paste".into(), "Add coconut milk".into()],
        availability: AvailabilityInput {
            is_available: true,
            max_orders_per_day: 8,
            advance_order_days: 1,
        },
    }
}
