mod product;

pub use self::product::{
    AvailabilityInput, CreateProductRequest, FindAllProducts, IngredientInput,
    NutritionalInfoInput, ProductFilter, UpdateProductRequest,
};
