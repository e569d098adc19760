use crate::Db;
use cir_core::{
    models::{ProductData, ProductId, ProductPatch, ProductRecord},
    ports::{ProductFailure, ProductRepository},
};
use sqlx::types::Json;

impl ProductRepository for Db {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, Self::Error> {
        let documents = sqlx::query_scalar::<_, Json<ProductData>>(
            r#"
            select
                json(data)
            from
                product
            "#,
        )
        .fetch_all(&self.reader)
        .await?;

        Ok(documents
            .into_iter()
            .map(|Json(data)| data.into())
            .collect())
    }

    async fn get_product(
        &self,
        product_id: &ProductId,
    ) -> Result<Result<ProductRecord, ProductFailure>, Self::Error> {
        let document = sqlx::query_scalar::<_, Json<ProductData>>(
            r#"
            select
                json(data)
            from
                product
            where
                id = $1
            "#,
        )
        .bind(product_id.as_str())
        .fetch_optional(&self.reader)
        .await?;

        Ok(document
            .map(|Json(data)| data.into())
            .ok_or(ProductFailure::NotFound))
    }

    async fn create_product(
        &self,
        data: ProductData,
    ) -> Result<Result<ProductRecord, ProductFailure>, Self::Error> {
        if let Err(err) = data.validate() {
            return Ok(Err(err.into()));
        }

        // The barcode is the key verbatim; the primary key settles any race
        // between two creates of the same product.
        let document = Json(&data);
        let inserted = sqlx::query(
            r#"
            insert into
                product (id, data)
            values
                ($1, jsonb($2))
            "#,
        )
        .bind(data.barcode.as_str())
        .bind(document)
        .execute(&self.writer)
        .await;

        match inserted {
            Ok(_) => Ok(Ok(data.into())),
            Err(err) if is_unique_violation(&err) => Ok(Err(ProductFailure::AlreadyExists)),
            Err(err) => Err(err),
        }
    }

    async fn update_product(
        &self,
        product_id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Result<ProductRecord, ProductFailure>, Self::Error> {
        let mut tx = self.writer.begin().await?;

        let stored = sqlx::query_scalar::<_, Json<ProductData>>(
            r#"
            select
                json(data)
            from
                product
            where
                id = $1
            "#,
        )
        .bind(product_id.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        // Returning early drops `tx`, which rolls it back
        let Some(Json(mut data)) = stored else {
            return Ok(Err(ProductFailure::NotFound));
        };
        if let Err(err) = data.merge(patch).and_then(|()| data.validate()) {
            return Ok(Err(err.into()));
        }

        let document = Json(&data);
        sqlx::query(
            r#"
            update
                product
            set
                data = jsonb($2)
            where
                id = $1
            "#,
        )
        .bind(product_id.as_str())
        .bind(document)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Ok(data.into()))
    }

    async fn delete_product(
        &self,
        product_id: &ProductId,
    ) -> Result<Result<ProductRecord, ProductFailure>, Self::Error> {
        let removed = sqlx::query_scalar::<_, Json<ProductData>>(
            r#"
            delete from
                product
            where
                id = $1
            returning
                json(data)
            "#,
        )
        .bind(product_id.as_str())
        .fetch_optional(&self.writer)
        .await?;

        Ok(removed
            .map(|Json(data)| data.into())
            .ok_or(ProductFailure::NotFound))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|err| err.is_unique_violation())
}
